//! Capability traits over the persistence layer.
//!
//! Handlers depend on these traits (through `Arc<dyn Store>`) rather than on a
//! concrete pool, so the credential store and workout store can be swapped for
//! in-process implementations in tests. [`PgStore`] is the production
//! implementation and simply delegates to the `*Repo` query structs.

use async_trait::async_trait;
use trainlog_core::types::DbId;

use crate::models::exercise::{CreateExercise, Exercise};
use crate::models::exercise_set::{CreateExerciseSet, ExerciseSet};
use crate::models::user::{CreateUser, User};
use crate::models::workout_session::{CreateWorkoutSession, SessionFilter, WorkoutSession};
use crate::repositories::{ExerciseRepo, ExerciseSetRepo, UserRepo, WorkoutSessionRepo};
use crate::DbPool;

/// Credential store. Lookups return `Ok(None)` when no record matches.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn create_user(&self, input: &CreateUser) -> Result<User, sqlx::Error>;

    async fn find_user_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error>;
}

/// Workout history store: sessions, their exercises, and the sets of each exercise.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    async fn create_session(
        &self,
        input: &CreateWorkoutSession,
    ) -> Result<WorkoutSession, sqlx::Error>;

    async fn find_session(&self, id: DbId) -> Result<Option<WorkoutSession>, sqlx::Error>;

    /// Sessions owned by `user_id`, newest first.
    async fn list_sessions(
        &self,
        user_id: DbId,
        filter: &SessionFilter,
    ) -> Result<Vec<WorkoutSession>, sqlx::Error>;

    async fn create_exercise(&self, input: &CreateExercise) -> Result<Exercise, sqlx::Error>;

    async fn find_exercise(&self, id: DbId) -> Result<Option<Exercise>, sqlx::Error>;

    async fn list_exercises(&self, session_id: DbId) -> Result<Vec<Exercise>, sqlx::Error>;

    async fn create_set(&self, input: &CreateExerciseSet) -> Result<ExerciseSet, sqlx::Error>;

    async fn list_sets(&self, exercise_id: DbId) -> Result<Vec<ExerciseSet>, sqlx::Error>;
}

/// Everything the API needs from persistence.
#[async_trait]
pub trait Store: UserStore + WorkoutStore {
    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// PostgreSQL-backed [`Store`].
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, input: &CreateUser) -> Result<User, sqlx::Error> {
        UserRepo::create(&self.pool, input).await
    }

    async fn find_user_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error> {
        UserRepo::find_by_id(&self.pool, id).await
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        UserRepo::find_by_username(&self.pool, username).await
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        UserRepo::find_by_email(&self.pool, email).await
    }
}

#[async_trait]
impl WorkoutStore for PgStore {
    async fn create_session(
        &self,
        input: &CreateWorkoutSession,
    ) -> Result<WorkoutSession, sqlx::Error> {
        WorkoutSessionRepo::create(&self.pool, input).await
    }

    async fn find_session(&self, id: DbId) -> Result<Option<WorkoutSession>, sqlx::Error> {
        WorkoutSessionRepo::find_by_id(&self.pool, id).await
    }

    async fn list_sessions(
        &self,
        user_id: DbId,
        filter: &SessionFilter,
    ) -> Result<Vec<WorkoutSession>, sqlx::Error> {
        WorkoutSessionRepo::list_for_user(&self.pool, user_id, filter).await
    }

    async fn create_exercise(&self, input: &CreateExercise) -> Result<Exercise, sqlx::Error> {
        ExerciseRepo::create(&self.pool, input).await
    }

    async fn find_exercise(&self, id: DbId) -> Result<Option<Exercise>, sqlx::Error> {
        ExerciseRepo::find_by_id(&self.pool, id).await
    }

    async fn list_exercises(&self, session_id: DbId) -> Result<Vec<Exercise>, sqlx::Error> {
        ExerciseRepo::list_by_session(&self.pool, session_id).await
    }

    async fn create_set(&self, input: &CreateExerciseSet) -> Result<ExerciseSet, sqlx::Error> {
        ExerciseSetRepo::create(&self.pool, input).await
    }

    async fn list_sets(&self, exercise_id: DbId) -> Result<Vec<ExerciseSet>, sqlx::Error> {
        ExerciseSetRepo::list_by_exercise(&self.pool, exercise_id).await
    }
}

#[async_trait]
impl Store for PgStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
