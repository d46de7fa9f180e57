//! HTTP client for the OpenAI chat-completion endpoint.
//!
//! [`OpenAiClient`] sends a single system-role message with low-temperature
//! sampling and returns the raw completion text. It knows nothing about the
//! payload shapes the gateway expects; that contract lives in
//! [`crate::gateway`].

use serde::{Deserialize, Serialize};

/// Sampling temperature for all content generation calls.
pub const COMPLETION_TEMPERATURE: f32 = 0.7;

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Base URL used when `OPENAI_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Connection configuration for the completion endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl OpenAiConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var           | Default                     |
    /// |-------------------|-----------------------------|
    /// | `OPENAI_API_KEY`  | (required)                  |
    /// | `OPENAI_MODEL`    | `gpt-4o`                    |
    /// | `OPENAI_BASE_URL` | `https://api.openai.com/v1` |
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();
        Self {
            api_key,
            model,
            base_url,
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from the completion HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint returned a non-2xx status code.
    #[error("OpenAI API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Client for a single chat-completion endpoint.
pub struct OpenAiClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful for
    /// connection pooling across services).
    pub fn with_client(client: reqwest::Client, config: OpenAiConfig) -> Self {
        Self { client, config }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Send `prompt` as a single system-role message and return the raw
    /// completion text.
    ///
    /// A response with no choices or no content yields an empty string;
    /// the gateway's sanitization step rejects that as a malformed
    /// response rather than treating it as success.
    pub async fn complete(&self, prompt: &str) -> Result<String, OpenAiError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "system".into(),
                content: prompt.to_string(),
            }],
            temperature: COMPLETION_TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        tracing::debug!(
            model = %self.config.model,
            chars = content.len(),
            "Received completion"
        );

        Ok(content)
    }
}
