//! Repository for the `workout_sessions` table.

use sqlx::PgPool;
use trainlog_core::types::DbId;

use crate::models::workout_session::{CreateWorkoutSession, SessionFilter, WorkoutSession};

const COLUMNS: &str = "id, training_date, user_id";

/// Provides create, lookup and listing for workout sessions.
pub struct WorkoutSessionRepo;

impl WorkoutSessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateWorkoutSession,
    ) -> Result<WorkoutSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO workout_sessions (user_id, training_date)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(input.user_id)
            .bind(input.training_date)
            .fetch_one(pool)
            .await
    }

    /// Find a session by ID regardless of owner. Ownership is checked by the caller.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WorkoutSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM workout_sessions WHERE id = $1");
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List sessions owned by `user_id`, newest training date first.
    ///
    /// Unset filter fields are ignored.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        filter: &SessionFilter,
    ) -> Result<Vec<WorkoutSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM workout_sessions
             WHERE user_id = $1
               AND ($2::BIGINT IS NULL OR id = $2)
               AND ($3::DATE IS NULL OR training_date = $3)
             ORDER BY training_date DESC, id DESC"
        );
        sqlx::query_as::<_, WorkoutSession>(&query)
            .bind(user_id)
            .bind(filter.id)
            .bind(filter.training_date)
            .fetch_all(pool)
            .await
    }
}
