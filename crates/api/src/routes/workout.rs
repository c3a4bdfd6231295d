//! Route definitions for the `/workouts` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::workout;
use crate::state::AppState;

/// Routes mounted at `/workouts`.
///
/// ```text
/// GET  /                                    -> list_workouts
/// POST /                                    -> create_workout
/// GET  /{id}                                -> get_workout
/// POST /{id}/exercises                      -> create_exercise
/// POST /{id}/exercises/{exercise_id}/sets   -> create_set
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(workout::list_workouts).post(workout::create_workout))
        .route("/{id}", get(workout::get_workout))
        .route("/{id}/exercises", post(workout::create_exercise))
        .route(
            "/{id}/exercises/{exercise_id}/sets",
            post(workout::create_set),
        )
}
