use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::classify::ProviderErrorKind;

pub const MISSING_FIELDS_MESSAGE: &str =
    "Missing required fields: Full Name, Company Name, and Job Title are required.";
pub const MISSING_KEY_MESSAGE: &str = "OpenRouter API key not configured. \
    Please add OPENROUTER_API_KEY to your environment variables.";
pub const RESPONSE_FORMAT_MESSAGE: &str =
    "Invalid response from OpenRouter API. Please check your API key and try again.";
pub const EMPTY_RESPONSE_MESSAGE: &str = "No content in response from DeepSeek";
pub const TRANSPORT_MESSAGE: &str =
    "Could not reach OpenRouter. Please check your connection and try again.";

/// Every way a single cover-letter generation can fail.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    #[error("Provider credential is not configured")]
    Configuration,

    #[error("Provider error (status {status}, {kind:?}): {message}")]
    Provider {
        status: u16,
        kind: ProviderErrorKind,
        message: String,
    },

    #[error("Provider returned an unparsable body: {body}")]
    ResponseFormat { body: String },

    #[error("Provider returned no letter content")]
    EmptyResponse,

    #[error("Provider request failed: {0}")]
    Transport(String),
}

impl GenerationError {
    pub fn status(&self) -> StatusCode {
        match self {
            GenerationError::Validation(_) => StatusCode::BAD_REQUEST,
            GenerationError::Configuration
            | GenerationError::ResponseFormat { .. }
            | GenerationError::EmptyResponse => StatusCode::INTERNAL_SERVER_ERROR,
            GenerationError::Provider { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            GenerationError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// The single-line message the form displays.
    pub fn user_message(&self) -> String {
        match self {
            GenerationError::Validation(_) => MISSING_FIELDS_MESSAGE.to_string(),
            GenerationError::Configuration => MISSING_KEY_MESSAGE.to_string(),
            GenerationError::Provider { kind, message, .. } => kind.user_message(message),
            GenerationError::ResponseFormat { .. } => RESPONSE_FORMAT_MESSAGE.to_string(),
            GenerationError::EmptyResponse => EMPTY_RESPONSE_MESSAGE.to_string(),
            GenerationError::Transport(_) => TRANSPORT_MESSAGE.to_string(),
        }
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::MalformedBody(rejection) => {
                tracing::warn!("Rejected request body: {rejection}");
                (rejection.status(), rejection.body_text())
            }
            AppError::Generation(e) => {
                if e.status().is_server_error() {
                    tracing::error!("Generation failed: {e}");
                } else {
                    tracing::warn!("Generation rejected: {e}");
                }
                (e.status(), e.user_message())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
