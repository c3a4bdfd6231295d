pub mod auth;
pub mod health;
pub mod recommendation;
pub mod workout;

use axum::middleware::from_fn_with_state;
use axum::Router;

use crate::middleware::auth::require_identity;
use crate::state::AppState;

/// Build the API route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
///
/// /workouts                                        list, create
/// /workouts/{id}                                   get with exercises and sets
/// /workouts/{id}/exercises                         add exercise
/// /workouts/{id}/exercises/{exercise_id}/sets      add set
///
/// /recommendations                                 training-menu suggestion
/// ```
///
/// Everything outside `/auth` sits behind [`require_identity`].
pub fn api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/workouts", workout::router())
        .nest("/recommendations", recommendation::router())
        .route_layer(from_fn_with_state(state, require_identity));

    Router::new()
        .nest("/auth", auth::router())
        .merge(protected)
}
