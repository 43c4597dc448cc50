use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::llm_client::MODEL;
use crate::state::AppState;

/// GET /health
/// Returns a status object with service version and provider readiness.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "coverletter-api",
        "model": MODEL,
        "provider": state.config.openrouter_base_url,
        "credential_configured": state.gateway.has_credential(),
    }))
}
