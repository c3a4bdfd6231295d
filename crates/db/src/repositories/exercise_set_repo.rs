//! Repository for the `exercise_sets` table.

use sqlx::PgPool;
use trainlog_core::types::DbId;

use crate::models::exercise_set::{CreateExerciseSet, ExerciseSet};

const COLUMNS: &str = "id, exercise_id, set_number, weight, reps";

pub struct ExerciseSetRepo;

impl ExerciseSetRepo {
    /// Insert a new set, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExerciseSet,
    ) -> Result<ExerciseSet, sqlx::Error> {
        let query = format!(
            "INSERT INTO exercise_sets (exercise_id, set_number, weight, reps)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ExerciseSet>(&query)
            .bind(input.exercise_id)
            .bind(input.set_number)
            .bind(input.weight)
            .bind(input.reps)
            .fetch_one(pool)
            .await
    }

    /// List the sets of an exercise ordered by set number.
    pub async fn list_by_exercise(
        pool: &PgPool,
        exercise_id: DbId,
    ) -> Result<Vec<ExerciseSet>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM exercise_sets WHERE exercise_id = $1 ORDER BY set_number, id"
        );
        sqlx::query_as::<_, ExerciseSet>(&query)
            .bind(exercise_id)
            .fetch_all(pool)
            .await
    }
}
