//! Generation gateway — validates a request, builds the prompt, makes one
//! chat-completion call and turns the reply into a letter or a classified error.
//!
//! Flow: validate → credential check → build_prompt → transport.send →
//!       status check → parse body → extract text.
//!
//! One attempt per call. No retries, no caching, no shared mutable state.

use std::sync::Arc;

use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::errors::GenerationError;
use crate::letter::prompts::build_prompt;
use crate::llm_client::classify::{extract_provider_message, ProviderErrorKind};
use crate::llm_client::{ChatCompletionRequest, ChatCompletionResponse, ChatTransport};
use crate::models::request::GenerationRequest;

#[derive(Clone)]
pub struct LetterGateway {
    transport: Arc<dyn ChatTransport>,
    api_key: Option<String>,
}

impl LetterGateway {
    /// A blank `api_key` is treated the same as a missing one.
    pub fn new(transport: Arc<dyn ChatTransport>, api_key: Option<String>) -> Self {
        Self {
            transport,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generates a cover letter. The returned text is the model's output, untouched.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let span = info_span!("generate_letter", request_id = %Uuid::new_v4());
        self.generate_inner(request).instrument(span).await
    }

    async fn generate_inner(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        // Last checkpoint before anything leaves the process
        let missing = request.missing_required_fields();
        if !missing.is_empty() {
            return Err(GenerationError::Validation(missing));
        }

        let api_key = self
            .api_key
            .as_deref()
            .ok_or(GenerationError::Configuration)?;

        let prompt = build_prompt(request);
        info!(
            template = ?request.style.template,
            tone = ?request.style.tone,
            length = ?request.style.length,
            prompt_chars = prompt.len(),
            "Requesting cover letter"
        );

        let raw = self
            .transport
            .send(api_key, &ChatCompletionRequest::for_prompt(&prompt))
            .await
            .map_err(|e| {
                error!("Chat completion request failed: {e}");
                GenerationError::Transport(e.to_string())
            })?;

        if !raw.is_success() {
            let message = extract_provider_message(raw.status, &raw.body);
            let kind = ProviderErrorKind::classify(raw.status, &message);
            error!(status = raw.status, ?kind, "Provider error: {}", raw.body);
            return Err(GenerationError::Provider {
                status: raw.status,
                kind,
                message,
            });
        }

        let parsed: ChatCompletionResponse = match serde_json::from_str(&raw.body) {
            Ok(parsed) => parsed,
            Err(e) => {
                error!("Failed to parse provider response as JSON: {e}; body: {}", raw.body);
                return Err(GenerationError::ResponseFormat { body: raw.body });
            }
        };

        match parsed.text() {
            Some(text) if !text.trim().is_empty() => {
                info!(letter_chars = text.len(), "Cover letter generated");
                Ok(text.to_string())
            }
            _ => {
                warn!("No content in provider response: {}", raw.body);
                Err(GenerationError::EmptyResponse)
            }
        }
    }
}
