use crate::config::Config;
use crate::letter::gateway::LetterGateway;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Stateless and re-entrant; every request shares the one instance.
    pub gateway: LetterGateway,
    pub config: Config,
}
