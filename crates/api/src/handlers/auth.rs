//! Handlers for the `/auth` resource (register, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use trainlog_core::error::CoreError;
use trainlog_core::validation::{require_non_empty, validate_email};
use trainlog_db::models::user::CreateUser;

use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{MessageResponse, TokenResponse};
use crate::state::AppState;

const USERNAME_TAKEN: &str = "Username already exists";
const EMAIL_TAKEN: &str = "Email already exists";
const INVALID_CREDENTIALS: &str = "Invalid credentials";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`. Absent fields read as empty.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create a credential record. Username and email must both be unused.
pub async fn register(
    State(state): State<AppState>,
    AppJson(input): AppJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    require_non_empty(&input.username, "Username")?;
    require_non_empty(&input.email, "Email")?;
    require_non_empty(&input.password, "Password")?;
    validate_email(&input.email)?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if state
        .store
        .find_user_by_username(&input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(USERNAME_TAKEN.into())));
    }
    if state.store.find_user_by_email(&input.email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(EMAIL_TAKEN.into())));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let new_user = CreateUser {
        username: input.username,
        email: input.email,
        password_hash,
    };

    // A concurrent registration can still win the race between the lookups
    // above and this insert; the unique constraints decide.
    let user = state
        .store
        .create_user(&new_user)
        .await
        .map_err(|err| match trainlog_db::unique_violation(&err) {
            Some("uq_users_username") => AppError::Core(CoreError::Conflict(USERNAME_TAKEN.into())),
            Some("uq_users_email") => AppError::Core(CoreError::Conflict(EMAIL_TAKEN.into())),
            _ => AppError::Database(err),
        })?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully",
        }),
    ))
}

/// POST /auth/login
///
/// Exchange email + password for a bearer token. Unknown email and wrong
/// password are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    require_non_empty(&input.email, "Email")?;
    require_non_empty(&input.password, "Password")?;

    let invalid = || AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()));

    let Some(user) = state.store.find_user_by_email(&input.email).await? else {
        tracing::info!("Login rejected: unknown email");
        return Err(invalid());
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid());
    }

    let token = state.tokens.issue(user.id)?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(TokenResponse { token }))
}
