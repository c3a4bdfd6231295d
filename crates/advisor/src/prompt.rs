//! Prompt template for training-menu suggestions.

use serde::Deserialize;

/// Role description sent as the system message.
pub const SYSTEM_PROMPT: &str = "You are a professional personal trainer.";

/// Conditions the user picked for a training-menu suggestion.
#[derive(Debug, Clone, Deserialize)]
pub struct TrainingRequest {
    /// e.g. `"hypertrophy"`, `"fat loss"`.
    pub training_goal: String,
    /// Body parts to target, e.g. `["chest", "back"]`.
    #[serde(default)]
    pub target_parts: Vec<String>,
    /// e.g. `"beginner"`, `"intermediate"`, `"advanced"`.
    #[serde(default)]
    pub experience_level: String,
    /// Minutes available for the session.
    pub available_time: i32,
}

/// Render the user message for a training-menu request.
pub fn build_prompt(request: &TrainingRequest) -> String {
    let parts = if request.target_parts.is_empty() {
        "any".to_string()
    } else {
        request.target_parts.join(", ")
    };

    format!(
        "Training goal: {goal}\n\
         Target body parts: {parts}\n\
         Training experience: {experience}\n\
         Available time: {minutes} minutes\n\
         \n\
         Based on the conditions above, propose a suitable strength-training menu. \
         Include the specific exercises, reps, sets, and rest intervals.",
        goal = request.training_goal,
        experience = request.experience_level,
        minutes = request.available_time,
    )
}
