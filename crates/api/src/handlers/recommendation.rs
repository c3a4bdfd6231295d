//! Handler for training-menu suggestions.

use axum::extract::State;
use axum::Json;
use trainlog_advisor::TrainingRequest;
use trainlog_core::error::CoreError;
use trainlog_core::validation::require_non_empty;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::RequestIdentity;
use crate::response::RecommendationResponse;
use crate::state::AppState;

/// POST /recommendations
///
/// Forwards the request conditions to the chat-completions API once and
/// returns the suggested menu text.
pub async fn recommend(
    State(state): State<AppState>,
    identity: RequestIdentity,
    AppJson(input): AppJson<TrainingRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    require_non_empty(&input.training_goal, "Training goal")?;
    if input.available_time <= 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Available time must be a positive number of minutes".into(),
        )));
    }

    let advisor = state
        .advisor
        .as_ref()
        .ok_or_else(|| AppError::InternalError("OPENAI_API_KEY is not configured".into()))?;

    let recommendation = advisor.propose_training_menu(&input).await?;
    tracing::info!(user_id = identity.user_id, "Training menu generated");

    Ok(Json(RecommendationResponse { recommendation }))
}
