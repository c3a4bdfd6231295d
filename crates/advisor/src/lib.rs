//! Training-menu suggestions from an OpenAI-compatible chat-completions API.
//!
//! - [`prompt`] -- request shape and prompt template.
//! - [`api`] -- HTTP client for the `/chat/completions` endpoint.

pub mod api;
pub mod prompt;

pub use api::{AdvisorConfig, AdvisorError, TrainingAdvisor};
pub use prompt::TrainingRequest;
