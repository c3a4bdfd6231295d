//! Repository for the `exercises` table.

use sqlx::PgPool;
use trainlog_core::types::DbId;

use crate::models::exercise::{CreateExercise, Exercise};

const COLUMNS: &str = "id, session_id, exercise_name";

pub struct ExerciseRepo;

impl ExerciseRepo {
    /// Insert a new exercise, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateExercise) -> Result<Exercise, sqlx::Error> {
        let query = format!(
            "INSERT INTO exercises (session_id, exercise_name)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Exercise>(&query)
            .bind(input.session_id)
            .bind(&input.exercise_name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises WHERE id = $1");
        sqlx::query_as::<_, Exercise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the exercises of a session in insertion order.
    pub async fn list_by_session(
        pool: &PgPool,
        session_id: DbId,
    ) -> Result<Vec<Exercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM exercises WHERE session_id = $1 ORDER BY id");
        sqlx::query_as::<_, Exercise>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }
}
