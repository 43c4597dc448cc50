//! LLM Client — the single point of entry for chat-completion calls.
//!
//! No other module may talk to the model provider directly. The gateway hands
//! a `ChatCompletionRequest` to a `ChatTransport` and interprets the raw
//! status/body it gets back.
//!
//! Model: deepseek/deepseek-r1-0528:free via OpenRouter (hardcoded, not configurable)

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod classify;

pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
/// The model used for every generation call.
pub const MODEL: &str = "deepseek/deepseek-r1-0528:free";
pub const TEMPERATURE: f32 = 0.8;
pub const MAX_TOKENS: u32 = 1500;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    /// A single-user-message request with the fixed model and sampling settings.
    pub fn for_prompt(prompt: &'a str) -> Self {
        Self {
            model: MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        }
    }
}

/// Success body of a chat completion. Every level is optional so that a
/// well-formed but empty reply parses and can be reported as empty.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ChoiceMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Content of the first choice, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .as_deref()
            .and_then(<[Choice]>::first)
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

/// Status and body exactly as the provider returned them.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one chat-completion request and returns the raw reply.
///
/// Carried by the gateway as `Arc<dyn ChatTransport>`; tests swap in a mock.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<RawResponse, LlmError>;
}

/// reqwest-backed transport for OpenRouter-compatible endpoints.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// `timeout` of `None` leaves reqwest's default in place.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build().context("Failed to build HTTP client")?,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ChatTransport for HttpTransport {
    async fn send(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<RawResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!("Chat completion returned {} ({} bytes)", status, body.len());

        Ok(RawResponse { status, body })
    }
}
