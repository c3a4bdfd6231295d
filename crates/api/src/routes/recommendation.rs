use axum::routing::post;
use axum::Router;

use crate::handlers::recommendation;
use crate::state::AppState;

/// Routes mounted at `/recommendations`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(recommendation::recommend))
}
