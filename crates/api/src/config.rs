use std::fmt;

use trainlog_advisor::AdvisorConfig;

use crate::auth::jwt::JwtConfig;

/// Error raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the database URL and the signing secret have defaults
/// suitable for local development.
#[derive(Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `50`).
    pub db_max_connections: u32,
    /// Token signing configuration.
    pub jwt: JwtConfig,
    /// Chat-completions settings; `None` when `OPENAI_API_KEY` is unset.
    pub advisor: Option<AdvisorConfig>,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("database_url", &"<redacted>")
            .field("db_max_connections", &self.db_max_connections)
            .field("jwt", &self.jwt)
            .field("advisor", &self.advisor)
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                     |
    /// |------------------------|-----------------------------|
    /// | `HOST`                 | `0.0.0.0`                   |
    /// | `PORT`                 | `8080`                      |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                        |
    /// | `DATABASE_URL`         | required                    |
    /// | `DB_MAX_CONNECTIONS`   | `50`                        |
    /// | `OPENAI_API_KEY`       | unset (advisor disabled)    |
    /// | `OPENAI_BASE_URL`      | `https://api.openai.com/v1` |
    /// | `OPENAI_MODEL`         | `gpt-3.5-turbo`             |
    ///
    /// Token settings are read by [`JwtConfig::from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("PORT", 8080u16)?;
        let cors_origins = split_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );
        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", 30u64)?;

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let db_max_connections = parse_var("DB_MAX_CONNECTIONS", 50u32)?;

        let jwt = JwtConfig::from_env()?;

        let advisor = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|api_key| AdvisorConfig {
                api_key,
                base_url: std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".into())
                    .trim_end_matches('/')
                    .to_string(),
                model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".into()),
            });

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            db_max_connections,
            jwt,
            advisor,
        })
    }
}

/// Read `key` and parse it, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        Err(_) => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
