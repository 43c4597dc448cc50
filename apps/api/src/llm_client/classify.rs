//! Maps provider error replies onto the user-facing failure categories.

use serde_json::Value;

pub const AUTHENTICATION_MESSAGE: &str = "Invalid OpenRouter API key. Please verify your \
    OPENROUTER_API_KEY is correct at https://openrouter.ai/keys";
pub const RATE_LIMIT_MESSAGE: &str = "Rate limit reached. Please try again in a moment.";
pub const MODEL_UNAVAILABLE_MESSAGE: &str = "DeepSeek model not available. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Authentication,
    RateLimit,
    ModelUnavailable,
    Unclassified,
}

impl ProviderErrorKind {
    /// Classifies by message text first, then by status code.
    pub fn classify(status: u16, message: &str) -> Self {
        let lower = message.to_lowercase();

        if lower.contains("api key") || lower.contains("authentication") {
            return ProviderErrorKind::Authentication;
        }
        if lower.contains("rate limit") || lower.contains("quota") {
            return ProviderErrorKind::RateLimit;
        }
        if lower.contains("model") || lower.contains("not found") {
            return ProviderErrorKind::ModelUnavailable;
        }

        match status {
            401 | 403 => ProviderErrorKind::Authentication,
            429 => ProviderErrorKind::RateLimit,
            _ => ProviderErrorKind::Unclassified,
        }
    }

    /// Text shown to the user. `Unclassified` passes the provider's own words through.
    pub fn user_message(self, provider_message: &str) -> String {
        match self {
            ProviderErrorKind::Authentication => AUTHENTICATION_MESSAGE.to_string(),
            ProviderErrorKind::RateLimit => RATE_LIMIT_MESSAGE.to_string(),
            ProviderErrorKind::ModelUnavailable => MODEL_UNAVAILABLE_MESSAGE.to_string(),
            ProviderErrorKind::Unclassified => provider_message.to_string(),
        }
    }
}

/// Pulls a human-readable message out of an error body, which may not be JSON at all.
///
/// Order: `error.message`, top-level `message`, the JSON re-serialized, the raw text.
pub fn extract_provider_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("Provider returned HTTP {status}");
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value
            .pointer("/error/message")
            .and_then(Value::as_str)
            .or_else(|| value.get("message").and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        Err(_) => trimmed.to_string(),
    }
}
