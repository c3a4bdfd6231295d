//! Exercise model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use trainlog_core::types::DbId;

/// A row from the `exercises` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Exercise {
    #[serde(rename = "exercise_id")]
    pub id: DbId,
    pub session_id: DbId,
    pub exercise_name: String,
}

/// DTO for adding an exercise to a session.
#[derive(Debug, Clone)]
pub struct CreateExercise {
    pub session_id: DbId,
    pub exercise_name: String,
}
