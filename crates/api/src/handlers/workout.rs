//! Handlers for workout sessions, their exercises, and exercise sets.
//!
//! Every handler runs behind the identity middleware and checks ownership
//! through the parent session before reading or writing anything.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use trainlog_core::error::CoreError;
use trainlog_core::ownership::ensure_owner;
use trainlog_core::types::DbId;
use trainlog_core::validation::{parse_training_date, require_non_empty, validate_set_values};
use trainlog_db::models::exercise::CreateExercise;
use trainlog_db::models::exercise_set::CreateExerciseSet;
use trainlog_db::models::workout_session::{CreateWorkoutSession, SessionFilter, WorkoutSession};

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::middleware::auth::RequestIdentity;
use crate::response::{
    ExerciseDetail, ExerciseResponse, SetListResponse, WorkoutDetail, WorkoutListResponse,
    WorkoutResponse,
};
use crate::state::AppState;

/// Query parameters for `GET /workouts`. Empty values mean "no filter".
#[derive(Debug, Default, Deserialize)]
pub struct WorkoutQuery {
    pub id: Option<String>,
    pub date: Option<String>,
}

impl WorkoutQuery {
    fn into_filter(self) -> AppResult<SessionFilter> {
        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<DbId>()
                    .map_err(|_| AppError::BadRequest(format!("Invalid workout id: {raw}")))?,
            ),
        };
        let training_date = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_training_date(raw)?),
        };
        Ok(SessionFilter { id, training_date })
    }
}

/// Request body for `POST /workouts`.
#[derive(Debug, Deserialize)]
pub struct CreateWorkoutRequest {
    #[serde(default)]
    pub date: String,
}

/// Request body for `POST /workouts/{id}/exercises`.
#[derive(Debug, Deserialize)]
pub struct CreateExerciseRequest {
    #[serde(default)]
    pub exercise_name: String,
}

/// Request body for `POST /workouts/{id}/exercises/{exercise_id}/sets`.
#[derive(Debug, Deserialize)]
pub struct CreateSetRequest {
    pub set_number: i32,
    pub weight: f64,
    pub reps: i32,
}

/// GET /workouts?id=&date=
///
/// The caller's sessions, newest first, optionally narrowed by id and date.
pub async fn list_workouts(
    State(state): State<AppState>,
    identity: RequestIdentity,
    AppQuery(query): AppQuery<WorkoutQuery>,
) -> AppResult<Json<WorkoutListResponse>> {
    let filter = query.into_filter()?;
    let workouts = state.store.list_sessions(identity.user_id, &filter).await?;
    Ok(Json(WorkoutListResponse { workouts }))
}

/// GET /workouts/{id}
pub async fn get_workout(
    State(state): State<AppState>,
    identity: RequestIdentity,
    AppPath(session_id): AppPath<DbId>,
) -> AppResult<Json<WorkoutResponse<WorkoutDetail>>> {
    let session = find_owned_session(&state, session_id, identity).await?;

    let mut exercises = Vec::new();
    for exercise in state.store.list_exercises(session.id).await? {
        let sets = state.store.list_sets(exercise.id).await?;
        exercises.push(ExerciseDetail { exercise, sets });
    }

    Ok(Json(WorkoutResponse {
        workout: WorkoutDetail { session, exercises },
    }))
}

/// POST /workouts
///
/// The owner is always the caller.
pub async fn create_workout(
    State(state): State<AppState>,
    identity: RequestIdentity,
    AppJson(input): AppJson<CreateWorkoutRequest>,
) -> AppResult<(StatusCode, Json<WorkoutResponse<WorkoutSession>>)> {
    require_non_empty(&input.date, "Date")?;
    let training_date = parse_training_date(&input.date)?;

    let session = state
        .store
        .create_session(&CreateWorkoutSession {
            user_id: identity.user_id,
            training_date,
        })
        .await?;

    tracing::info!(session_id = session.id, user_id = identity.user_id, "Workout created");

    Ok((StatusCode::CREATED, Json(WorkoutResponse { workout: session })))
}

/// POST /workouts/{id}/exercises
pub async fn create_exercise(
    State(state): State<AppState>,
    identity: RequestIdentity,
    AppPath(session_id): AppPath<DbId>,
    AppJson(input): AppJson<CreateExerciseRequest>,
) -> AppResult<(StatusCode, Json<ExerciseResponse>)> {
    let session = find_owned_session(&state, session_id, identity).await?;
    require_non_empty(&input.exercise_name, "Exercise name")?;

    let exercise = state
        .store
        .create_exercise(&CreateExercise {
            session_id: session.id,
            exercise_name: input.exercise_name.trim().to_string(),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ExerciseResponse {
            exercise: ExerciseDetail {
                exercise,
                sets: Vec::new(),
            },
        }),
    ))
}

/// POST /workouts/{id}/exercises/{exercise_id}/sets
///
/// Responds with every set of the exercise, the new one included.
pub async fn create_set(
    State(state): State<AppState>,
    identity: RequestIdentity,
    AppPath((session_id, exercise_id)): AppPath<(DbId, DbId)>,
    AppJson(input): AppJson<CreateSetRequest>,
) -> AppResult<(StatusCode, Json<SetListResponse>)> {
    let session = find_owned_session(&state, session_id, identity).await?;

    let exercise = state
        .store
        .find_exercise(exercise_id)
        .await?
        .filter(|exercise| exercise.session_id == session.id)
        .ok_or(CoreError::NotFound {
            entity: "Exercise",
            id: exercise_id,
        })?;

    validate_set_values(input.set_number, input.weight, input.reps)?;

    state
        .store
        .create_set(&CreateExerciseSet {
            exercise_id: exercise.id,
            set_number: input.set_number,
            weight: input.weight,
            reps: input.reps,
        })
        .await?;

    let sets = state.store.list_sets(exercise.id).await?;
    Ok((StatusCode::CREATED, Json(SetListResponse { sets })))
}

/// Load a session, 404 if unknown, 403 if the caller does not own it.
async fn find_owned_session(
    state: &AppState,
    session_id: DbId,
    identity: RequestIdentity,
) -> AppResult<WorkoutSession> {
    let session = state
        .store
        .find_session(session_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Workout",
            id: session_id,
        })?;

    if let Err(err) = ensure_owner(session.user_id, identity.user_id) {
        tracing::info!(
            session_id,
            owner_id = session.user_id,
            user_id = identity.user_id,
            "Workout access denied"
        );
        return Err(err.into());
    }
    Ok(session)
}
