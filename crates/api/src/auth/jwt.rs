//! Bearer token issuing and verification.
//!
//! Tokens are HMAC-signed JWTs carrying a [`Claims`] payload. They are never
//! persisted and cannot be revoked; a token stays valid until `exp`.
//!
//! Verification order is fixed: the MAC is checked first, then expiry, then
//! the shape of `user_id`. Claims are never trusted before the MAC verifies.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use trainlog_core::types::DbId;

use crate::config::ConfigError;

/// Default token lifetime in hours.
pub const DEFAULT_EXPIRY_HOURS: i64 = 24;

/// Configuration for token generation and validation.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours (default: 24).
    pub expiry_hours: i64,
}

impl JwtConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `JWT_SECRET`       | **yes**  | --      |
    /// | `JWT_EXPIRY_HOURS` | no       | `24`    |
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        if secret.is_empty() {
            return Err(ConfigError::Missing("JWT_SECRET"));
        }

        let expiry_hours = match std::env::var("JWT_EXPIRY_HOURS") {
            Ok(raw) => parse_expiry_hours(&raw)?,
            Err(_) => DEFAULT_EXPIRY_HOURS,
        };

        Ok(Self {
            secret,
            expiry_hours,
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiry_hours", &self.expiry_hours)
            .finish()
    }
}

/// Parse `JWT_EXPIRY_HOURS`: a positive hour count whose length in seconds
/// fits an `i64`.
fn parse_expiry_hours(raw: &str) -> Result<i64, ConfigError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|h| *h > 0 && h.checked_mul(3600).is_some())
        .ok_or_else(|| ConfigError::Invalid {
            key: "JWT_EXPIRY_HOURS",
            value: raw.to_string(),
        })
}

/// Verified token claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Claims {
    /// The authenticated user's database id. Always positive.
    pub user_id: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Claims as they arrive on the wire.
///
/// Every field is loosely typed: only `exp` and `user_id` decide validity,
/// and `iat` is informational.
#[derive(Debug, Deserialize)]
struct WireClaims {
    #[serde(default)]
    user_id: Option<serde_json::Value>,
    #[serde(default)]
    exp: Option<serde_json::Value>,
    #[serde(default)]
    iat: Option<serde_json::Value>,
}

/// Read a JSON number as unix seconds. Fractions are kept for comparison.
fn unix_seconds(value: Option<&serde_json::Value>) -> Option<f64> {
    value.and_then(serde_json::Value::as_f64)
}

impl WireClaims {
    /// Check expiry, then `user_id`, against `now`.
    fn into_claims(self, now: i64) -> Result<Claims, TokenError> {
        let exp = unix_seconds(self.exp.as_ref()).ok_or(TokenError::Malformed)?;
        if now as f64 >= exp {
            return Err(TokenError::Expired);
        }

        let user_id = self
            .user_id
            .as_ref()
            .and_then(serde_json::Value::as_i64)
            .filter(|id| *id > 0)
            .ok_or(TokenError::MalformedClaims)?;

        Ok(Claims {
            user_id,
            exp: exp as i64,
            iat: unix_seconds(self.iat.as_ref()).map_or(0, |iat| iat as i64),
        })
    }
}

/// Reasons a token cannot be issued or accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    /// Bad MAC, or an algorithm outside the HMAC family.
    #[error("token signature is invalid")]
    InvalidSignature,

    /// Not a decodable JWT.
    #[error("token is malformed")]
    Malformed,

    /// Signature is fine but `user_id` is missing, not an integer, or not positive.
    #[error("token claims are malformed")]
    MalformedClaims,

    #[error("failed to sign token: {0}")]
    Signing(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidSignature
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::InvalidKeyFormat => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        }
    }
}

/// Issues and verifies tokens with a single injected secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expiry_secs: i64,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // Expiry is compared against an explicit `now` in `verify_at`.
        validation.validate_exp = false;
        validation.validate_aud = false;
        // `exp` may be fractional, which the library's own presence check
        // rejects; `into_claims` enforces it instead.
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            expiry_secs: config.expiry_hours.saturating_mul(3600),
        }
    }

    /// Token lifetime in seconds.
    pub fn expiry_secs(&self) -> i64 {
        self.expiry_secs
    }

    /// Issue an HS256 token for `user_id`, valid from now.
    pub fn issue(&self, user_id: DbId) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, user_id: DbId, now: i64) -> Result<String, TokenError> {
        let exp = now
            .checked_add(self.expiry_secs)
            .ok_or_else(|| TokenError::Signing("expiry overflows a unix timestamp".into()))?;
        let claims = Claims {
            user_id,
            exp,
            iat: now,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify `token` against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify `token` as if the current time were `now`.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let data = decode::<WireClaims>(token, &self.decoding, &self.validation)?;
        data.claims.into_claims(now)
    }
}
