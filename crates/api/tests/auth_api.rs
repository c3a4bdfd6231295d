//! HTTP-level integration tests for registration and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_raw};
use serde_json::json;

fn registration(username: &str, email: &str, password: &str) -> serde_json::Value {
    json!({ "username": username, "email": email, "password": password })
}

#[tokio::test]
async fn register_returns_201_with_message() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/auth/register",
        registration("alice", "alice@example.com", "password123"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await,
        json!({ "message": "User created successfully" })
    );
}

#[tokio::test]
async fn duplicate_username_is_409() {
    let app = common::build_test_app();
    let first = post_json(
        app.clone(),
        "/auth/register",
        registration("alice", "alice@example.com", "password123"),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = post_json(
        app,
        "/auth/register",
        registration("alice", "other@example.com", "password123"),
    )
    .await;

    assert_eq!(second.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(second).await,
        json!({ "error": "Username already exists" })
    );
}

#[tokio::test]
async fn duplicate_email_is_409() {
    let app = common::build_test_app();
    post_json(
        app.clone(),
        "/auth/register",
        registration("alice", "alice@example.com", "password123"),
    )
    .await;

    let response = post_json(
        app,
        "/auth/register",
        registration("bob", "alice@example.com", "password123"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["error"], "Email already exists");
}

#[tokio::test]
async fn registration_validation_messages() {
    let cases = [
        (registration("", "a@example.com", "password123"), "Username cannot be empty"),
        (registration("alice", "", "password123"), "Email cannot be empty"),
        (registration("alice", "a@example.com", ""), "Password cannot be empty"),
        (registration("alice", "not-an-email", "password123"), "Invalid email format"),
        (
            registration("alice", "a@example.com", "short"),
            "Password must be at least 8 characters long",
        ),
    ];

    for (body, expected) in cases {
        let app = common::build_test_app();
        let response = post_json(app, "/auth/register", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], expected);
    }
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = common::build_test_app();
    let response = post_raw(app, "/auth/register", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request payload"));
}

#[tokio::test]
async fn login_returns_a_token_for_the_user() {
    let app = common::build_test_app();
    let token = common::register_and_login(&app, "alice").await;

    let claims = common::test_tokens()
        .verify(&token)
        .expect("issued token verifies");
    assert!(claims.user_id > 0);
    assert_eq!(claims.exp - claims.iat, 24 * 3600);
}

#[tokio::test]
async fn wrong_password_is_401() {
    let app = common::build_test_app();
    post_json(
        app.clone(),
        "/auth/register",
        registration("alice", "alice@example.com", "password123"),
    )
    .await;

    let response = post_json(
        app,
        "/auth/login",
        json!({ "email": "alice@example.com", "password": "wrongpass1" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid credentials" })
    );
}

#[tokio::test]
async fn unknown_email_is_401() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/auth/login",
        json!({ "email": "nobody@example.com", "password": "password123" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid credentials");
}

#[tokio::test]
async fn login_with_empty_fields_is_400() {
    let app = common::build_test_app();
    let response = post_json(app, "/auth/login", json!({ "email": "", "password": "x" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Email cannot be empty");
}
