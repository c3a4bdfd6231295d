use std::sync::Arc;

use trainlog_advisor::TrainingAdvisor;
use trainlog_db::store::Store;

use crate::auth::jwt::TokenService;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Immutable after startup and cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Credential and workout persistence.
    pub store: Arc<dyn Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Issues and verifies bearer tokens with the configured secret.
    pub tokens: Arc<TokenService>,
    /// Training-menu client; `None` when no API key is configured.
    pub advisor: Option<Arc<TrainingAdvisor>>,
}
