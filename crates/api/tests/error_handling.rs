//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use trainlog_api::auth::jwt::TokenError;
use trainlog_api::error::AppError;
use trainlog_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Workout",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, serde_json::json!({ "error": "Workout with id 42 not found" }));
}

#[tokio::test]
async fn validation_error_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Validation("bad field".into()))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad field");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Conflict("Username already exists".into())))
            .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "Username already exists");
}

#[tokio::test]
async fn forbidden_error_returns_403() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Forbidden("Access denied".into()))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "Access denied");
}

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::InternalError("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "An internal error occurred" }));
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn other_database_errors_are_sanitized() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn token_errors_map_to_fixed_401_messages() {
    for err in [
        TokenError::Expired,
        TokenError::InvalidSignature,
        TokenError::Malformed,
    ] {
        let (status, json) = error_to_response(err.into()).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["error"], "Invalid or expired token");
    }

    let (status, json) = error_to_response(TokenError::MalformedClaims.into()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        json["error"],
        "Invalid token claims: user_id missing or not a number"
    );

    let (status, _) = error_to_response(TokenError::Signing("boom".into()).into()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
