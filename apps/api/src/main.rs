mod config;
mod errors;
mod letter;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::letter::gateway::LetterGateway;
use crate::llm_client::HttpTransport;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cover letter API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM transport
    let transport = HttpTransport::new(&config.openrouter_base_url, config.llm_timeout)?;
    info!(
        "LLM transport initialized (endpoint: {}, model: {}, timeout: {:?})",
        transport.endpoint(),
        llm_client::MODEL,
        config.llm_timeout
    );

    let gateway = LetterGateway::new(Arc::new(transport), config.openrouter_api_key.clone());
    if !gateway.has_credential() {
        warn!("OPENROUTER_API_KEY is not set; generation requests will fail until it is");
    }

    // Build app state
    let state = AppState {
        gateway,
        config: config.clone(),
    };

    let app = build_router(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
