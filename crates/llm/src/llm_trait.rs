use crate::types::SummarizationRequest;
use async_trait::async_trait;
use skimmer_common::Result;

/// Remote summarization service
#[async_trait]
pub trait SummarizationBackend: Send + Sync {
    /// Summarize `request.inputs`, authenticating with `api_token`
    async fn summarize(&self, api_token: &str, request: &SummarizationRequest) -> Result<String>;
}
