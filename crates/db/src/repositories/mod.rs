//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod exercise_repo;
pub mod exercise_set_repo;
pub mod user_repo;
pub mod workout_session_repo;

pub use exercise_repo::ExerciseRepo;
pub use exercise_set_repo::ExerciseSetRepo;
pub use user_repo::UserRepo;
pub use workout_session_repo::WorkoutSessionRepo;
