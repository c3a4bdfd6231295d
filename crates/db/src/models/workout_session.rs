//! Workout session model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use trainlog_core::types::{DbId, TrainingDate};

/// A row from the `workout_sessions` table.
///
/// Serializes as `{"id", "date", "user_id"}` with the date as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct WorkoutSession {
    pub id: DbId,
    #[serde(rename = "date")]
    pub training_date: TrainingDate,
    pub user_id: DbId,
}

/// DTO for creating a workout session on behalf of `user_id`.
#[derive(Debug, Clone)]
pub struct CreateWorkoutSession {
    pub user_id: DbId,
    pub training_date: TrainingDate,
}

/// Optional narrowing applied when listing a user's sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    pub id: Option<DbId>,
    pub training_date: Option<TrainingDate>,
}

impl SessionFilter {
    /// Whether `session` passes every filter that is set.
    pub fn matches(&self, session: &WorkoutSession) -> bool {
        self.id.map_or(true, |id| id == session.id)
            && self
                .training_date
                .map_or(true, |date| date == session.training_date)
    }
}
