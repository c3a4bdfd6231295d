#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use tokio::sync::Mutex;
use tower::ServiceExt;

use trainlog_advisor::{AdvisorConfig, TrainingAdvisor};
use trainlog_api::auth::jwt::{JwtConfig, TokenService};
use trainlog_api::config::ServerConfig;
use trainlog_api::router::build_app_router;
use trainlog_api::state::AppState;
use trainlog_core::types::DbId;
use trainlog_db::models::exercise::{CreateExercise, Exercise};
use trainlog_db::models::exercise_set::{CreateExerciseSet, ExerciseSet};
use trainlog_db::models::user::{CreateUser, User};
use trainlog_db::models::workout_session::{CreateWorkoutSession, SessionFilter, WorkoutSession};
use trainlog_db::store::{Store, UserStore, WorkoutStore};

pub const TEST_SECRET: &str = "integration-test-secret-long-enough";

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    sessions: Vec<WorkoutSession>,
    exercises: Vec<Exercise>,
    sets: Vec<ExerciseSet>,
    next_id: DbId,
}

impl Tables {
    fn next_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// Process-local [`Store`] so HTTP tests run without PostgreSQL.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, input: &CreateUser) -> Result<User, sqlx::Error> {
        let mut tables = self.tables.lock().await;
        let user = User {
            id: tables.next_id(),
            username: input.username.clone(),
            email: input.email.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_id(&self, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, sqlx::Error> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl WorkoutStore for MemoryStore {
    async fn create_session(
        &self,
        input: &CreateWorkoutSession,
    ) -> Result<WorkoutSession, sqlx::Error> {
        let mut tables = self.tables.lock().await;
        let session = WorkoutSession {
            id: tables.next_id(),
            training_date: input.training_date,
            user_id: input.user_id,
        };
        tables.sessions.push(session.clone());
        Ok(session)
    }

    async fn find_session(&self, id: DbId) -> Result<Option<WorkoutSession>, sqlx::Error> {
        let tables = self.tables.lock().await;
        Ok(tables.sessions.iter().find(|s| s.id == id).cloned())
    }

    async fn list_sessions(
        &self,
        user_id: DbId,
        filter: &SessionFilter,
    ) -> Result<Vec<WorkoutSession>, sqlx::Error> {
        let tables = self.tables.lock().await;
        let mut sessions: Vec<WorkoutSession> = tables
            .sessions
            .iter()
            .filter(|s| s.user_id == user_id && filter.matches(s))
            .cloned()
            .collect();
        sessions.sort_by(|a, b| {
            b.training_date
                .cmp(&a.training_date)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(sessions)
    }

    async fn create_exercise(&self, input: &CreateExercise) -> Result<Exercise, sqlx::Error> {
        let mut tables = self.tables.lock().await;
        let exercise = Exercise {
            id: tables.next_id(),
            session_id: input.session_id,
            exercise_name: input.exercise_name.clone(),
        };
        tables.exercises.push(exercise.clone());
        Ok(exercise)
    }

    async fn find_exercise(&self, id: DbId) -> Result<Option<Exercise>, sqlx::Error> {
        let tables = self.tables.lock().await;
        Ok(tables.exercises.iter().find(|e| e.id == id).cloned())
    }

    async fn list_exercises(&self, session_id: DbId) -> Result<Vec<Exercise>, sqlx::Error> {
        let tables = self.tables.lock().await;
        Ok(tables
            .exercises
            .iter()
            .filter(|e| e.session_id == session_id)
            .cloned()
            .collect())
    }

    async fn create_set(&self, input: &CreateExerciseSet) -> Result<ExerciseSet, sqlx::Error> {
        let mut tables = self.tables.lock().await;
        let set = ExerciseSet {
            id: tables.next_id(),
            exercise_id: input.exercise_id,
            set_number: input.set_number,
            weight: input.weight,
            reps: input.reps,
        };
        tables.sets.push(set.clone());
        Ok(set)
    }

    async fn list_sets(&self, exercise_id: DbId) -> Result<Vec<ExerciseSet>, sqlx::Error> {
        let tables = self.tables.lock().await;
        let mut sets: Vec<ExerciseSet> = tables
            .sets
            .iter()
            .filter(|s| s.exercise_id == exercise_id)
            .cloned()
            .collect();
        sets.sort_by_key(|s| (s.set_number, s.id));
        Ok(sets)
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: TEST_SECRET.to_string(),
            expiry_hours: 24,
        },
        advisor: None,
    }
}

/// Token service sharing the app's secret, for minting tokens directly.
pub fn test_tokens() -> TokenService {
    TokenService::new(&test_config().jwt)
}

/// Build the full application router over a fresh [`MemoryStore`].
pub fn build_test_app() -> Router {
    build_test_app_with_advisor(None)
}

/// Like [`build_test_app`], with the advisor pointed at `advisor_base_url`.
pub fn build_test_app_with_advisor(advisor_base_url: Option<String>) -> Router {
    let mut config = test_config();
    config.advisor = advisor_base_url.map(|base_url| AdvisorConfig {
        api_key: "test-key".to_string(),
        base_url,
        model: "gpt-3.5-turbo".to_string(),
    });

    let state = AppState {
        store: Arc::new(MemoryStore::default()),
        tokens: Arc::new(TokenService::new(&config.jwt)),
        advisor: config
            .advisor
            .clone()
            .map(|c| Arc::new(TrainingAdvisor::new(c))),
        config: Arc::new(config),
    };

    build_app_router(state).expect("test config should build a router")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router is infallible")
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: &serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET with a raw `Authorization` header value.
pub async fn get_with_header(app: Router, uri: &str, authorization: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header("authorization", authorization)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, None, &body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, json_request(Method::POST, uri, Some(token), &body)).await
}

pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Flows
// ---------------------------------------------------------------------------

/// Register `username` (email `<username>@example.com`) and return a token.
pub async fn register_and_login(app: &Router, username: &str) -> String {
    let email = format!("{username}@example.com");
    let register = post_json(
        app.clone(),
        "/auth/register",
        serde_json::json!({ "username": username, "email": email, "password": "password123" }),
    )
    .await;
    assert_eq!(register.status(), axum::http::StatusCode::CREATED);

    let login = post_json(
        app.clone(),
        "/auth/login",
        serde_json::json!({ "email": email, "password": "password123" }),
    )
    .await;
    assert_eq!(login.status(), axum::http::StatusCode::OK);
    body_json(login).await["token"]
        .as_str()
        .expect("login returns a token")
        .to_string()
}
