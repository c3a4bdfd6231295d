//! Bearer-token identity middleware and the [`RequestIdentity`] extractor.
//!
//! [`require_identity`] is mounted with `axum::middleware::from_fn_with_state`
//! as a route layer on every protected route. It never retries or falls back:
//! the first failure short-circuits with a 401.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use trainlog_core::error::CoreError;
use trainlog_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

pub const HEADER_REQUIRED: &str = "Authorization header required";
pub const HEADER_FORMAT: &str = "Authorization header format must be Bearer {token}";
pub const AUTHENTICATION_REQUIRED: &str = "Authentication required";

/// Identity of the caller, attached to the request once its token verifies.
///
/// Use this as an extractor parameter in any handler behind
/// [`require_identity`]:
///
/// ```ignore
/// async fn my_handler(identity: RequestIdentity) -> AppResult<Json<()>> {
///     tracing::info!(user_id = identity.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestIdentity {
    pub user_id: DbId,
}

/// Why an `Authorization` header could not yield a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BearerError {
    /// Header absent or empty.
    Missing,
    /// Anything other than exactly `Bearer <token>`.
    BadFormat,
}

impl From<BearerError> for AppError {
    fn from(err: BearerError) -> Self {
        let message = match err {
            BearerError::Missing => HEADER_REQUIRED,
            BearerError::BadFormat => HEADER_FORMAT,
        };
        AppError::Core(CoreError::Unauthorized(message.into()))
    }
}

/// Split an `Authorization` header value into its bearer token.
///
/// The value must be two space-separated parts, the first literally `Bearer`
/// and the second non-empty.
pub fn parse_bearer(header: Option<&HeaderValue>) -> Result<&str, BearerError> {
    let value = match header {
        Some(value) if !value.is_empty() => value,
        _ => return Err(BearerError::Missing),
    };
    let value = value.to_str().map_err(|_| BearerError::BadFormat)?;

    let parts: Vec<&str> = value.split(' ').collect();
    if parts.len() != 2 || parts[0] != "Bearer" || parts[1].is_empty() {
        return Err(BearerError::BadFormat);
    }
    Ok(parts[1])
}

/// Verify the bearer token and attach a [`RequestIdentity`] before running
/// the rest of the stack. The downstream response is returned unchanged.
pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let verified = {
        let token = parse_bearer(request.headers().get(AUTHORIZATION)).inspect_err(|err| {
            tracing::debug!(reason = ?err, path = %request.uri().path(), "Rejected authorization header");
        })?;
        state.tokens.verify(token)
    };

    let claims = verified.map_err(|err| {
        tracing::debug!(error = %err, "Rejected bearer token");
        AppError::from(err)
    })?;

    request.extensions_mut().insert(RequestIdentity {
        user_id: claims.user_id,
    });

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for RequestIdentity
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestIdentity>()
            .copied()
            .ok_or_else(|| AppError::Core(CoreError::Unauthorized(AUTHENTICATION_REQUIRED.into())))
    }
}
