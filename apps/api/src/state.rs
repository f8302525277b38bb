use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Loaded configuration, kept on state for handlers that need runtime settings.
    #[allow(dead_code)]
    pub config: Config,
}
