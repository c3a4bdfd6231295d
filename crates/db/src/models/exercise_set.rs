//! Exercise set model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use trainlog_core::types::DbId;

/// A row from the `exercise_sets` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ExerciseSet {
    #[serde(rename = "set_id")]
    pub id: DbId,
    pub exercise_id: DbId,
    pub set_number: i32,
    /// Load in kilograms; `0.0` for bodyweight work.
    pub weight: f64,
    pub reps: i32,
}

/// DTO for recording a set against an exercise.
#[derive(Debug, Clone)]
pub struct CreateExerciseSet {
    pub exercise_id: DbId,
    pub set_number: i32,
    pub weight: f64,
    pub reps: i32,
}
