//! REST client for the chat-completions endpoint.
//!
//! Sends one request per suggestion. There is no retry or custom timeout; a
//! failed call surfaces to the caller immediately.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::prompt::{build_prompt, TrainingRequest, SYSTEM_PROMPT};

/// Upper bound on the length of the generated menu.
const MAX_TOKENS: u32 = 800;
/// Sampling temperature; a little variety between suggestions.
const TEMPERATURE: f32 = 0.7;

/// Connection settings for the chat-completions API.
#[derive(Clone)]
pub struct AdvisorConfig {
    /// Bearer API key.
    pub api_key: String,
    /// Base URL without a trailing slash, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Model name, e.g. `gpt-3.5-turbo`.
    pub model: String,
}

impl fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

/// Errors from the advisor API layer.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Advisor API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The API answered without any choices.
    #[error("Advisor API returned no choices")]
    EmptyResponse,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: String,
}

/// HTTP client that turns a [`TrainingRequest`] into a suggested menu.
pub struct TrainingAdvisor {
    client: reqwest::Client,
    config: AdvisorConfig,
}

impl TrainingAdvisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create an advisor reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: AdvisorConfig) -> Self {
        Self { client, config }
    }

    /// Ask the model for a training menu matching `request`.
    ///
    /// Returns the text of the first choice.
    pub async fn propose_training_menu(
        &self,
        request: &TrainingRequest,
    ) -> Result<String, AdvisorError> {
        let prompt = build_prompt(request);
        let body = ChatRequest {
            model: &self.config.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        tracing::debug!(model = %self.config.model, "Requesting training menu");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AdvisorError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(AdvisorError::EmptyResponse)
    }
}
