use skimmer_common::{AppConfig, Result};
use skimmer_extract::{HttpPageFetcher, PageFetcher};
use skimmer_llm::{InferenceClient, SummarizationBackend};
use std::sync::Arc;

use crate::workflow::RequestOrchestrator;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Per-request workflow
    pub orchestrator: RequestOrchestrator,
}

impl AppState {
    /// Create new application state with the HTTP-backed components
    pub fn new(config: AppConfig) -> Result<Self> {
        let fetcher = Arc::new(HttpPageFetcher::new(config.fetch_timeout())?);
        let backend = Arc::new(InferenceClient::from_config(&config)?);

        Ok(Self::with_components(config, fetcher, backend))
    }

    /// Create state around caller-supplied collaborators
    pub fn with_components(
        config: AppConfig,
        fetcher: Arc<dyn PageFetcher>,
        backend: Arc<dyn SummarizationBackend>,
    ) -> Self {
        let orchestrator = RequestOrchestrator::from_config(&config, fetcher, backend);
        Self {
            config,
            orchestrator,
        }
    }
}
