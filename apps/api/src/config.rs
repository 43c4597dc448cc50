use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
///
/// The provider key is optional here: a missing key does not stop startup,
/// it fails each generation request with a configuration error instead.
#[derive(Clone)]
pub struct Config {
    pub openrouter_api_key: Option<String>,
    pub openrouter_base_url: String,
    /// `None` keeps the HTTP client's default.
    pub llm_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
}

// Hand-written so the key never reaches a log line
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field(
                "openrouter_api_key",
                &self.openrouter_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openrouter_base_url", &self.openrouter_base_url)
            .field("llm_timeout", &self.llm_timeout)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let llm_timeout = match lookup("LLM_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;
                anyhow::ensure!(secs > 0, "LLM_TIMEOUT_SECS must be greater than zero");
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Config {
            openrouter_api_key: lookup("OPENROUTER_API_KEY").filter(|k| !k.trim().is_empty()),
            openrouter_base_url: lookup("OPENROUTER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            llm_timeout,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
