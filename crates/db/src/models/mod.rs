//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts

pub mod exercise;
pub mod exercise_set;
pub mod user;
pub mod workout_session;
