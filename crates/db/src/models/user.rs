//! User credential model and DTOs.

use sqlx::FromRow;
use trainlog_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash, so it deliberately does not implement `Serialize`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
