//! Response envelopes for API handlers.
//!
//! Each resource is wrapped in a single named key (`{"workout": ...}`,
//! `{"workouts": [...]}`) so clients can tell payloads apart without
//! inspecting their fields.

use serde::Serialize;
use trainlog_db::models::exercise::Exercise;
use trainlog_db::models::exercise_set::ExerciseSet;
use trainlog_db::models::workout_session::WorkoutSession;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct WorkoutListResponse {
    pub workouts: Vec<WorkoutSession>,
}

/// `{"workout": T}` where `T` is a bare session or a [`WorkoutDetail`].
#[derive(Debug, Serialize)]
pub struct WorkoutResponse<T: Serialize> {
    pub workout: T,
}

#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub exercise: ExerciseDetail,
}

#[derive(Debug, Serialize)]
pub struct SetListResponse {
    pub sets: Vec<ExerciseSet>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendation: String,
}

/// A session with its exercises and their sets.
#[derive(Debug, Serialize)]
pub struct WorkoutDetail {
    #[serde(flatten)]
    pub session: WorkoutSession,
    pub exercises: Vec<ExerciseDetail>,
}

/// An exercise with its sets.
#[derive(Debug, Serialize)]
pub struct ExerciseDetail {
    #[serde(flatten)]
    pub exercise: Exercise,
    pub sets: Vec<ExerciseSet>,
}
