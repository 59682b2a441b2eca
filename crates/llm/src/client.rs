use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use skimmer_common::{AppConfig, Result, SkimmerError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Upper bound for a single backoff sleep
const MAX_BACKOFF: Duration = Duration::from_secs(300);

use crate::llm_trait::SummarizationBackend;
use crate::types::{parse_summary_response, SummarizationRequest};

/// Bounded retry with exponential backoff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one
    pub max_attempts: u32,

    /// Base delay in seconds, doubled after every failed attempt
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_factor: 0.5,
        }
    }
}

impl RetryPolicy {
    /// Single attempt, no retries
    pub fn none() -> Self {
        Self {
            max_attempts: 1,
            backoff_factor: 0.0,
        }
    }

    /// Delay before the attempt following `attempt` (1-based)
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16) as i32;
        Duration::try_from_secs_f64(self.backoff_factor * 2f64.powi(exponent))
            .map_or(MAX_BACKOFF, |delay| delay.min(MAX_BACKOFF))
    }
}

/// Failure of a single attempt
struct AttemptError {
    error: SkimmerError,
    retryable: bool,
}

impl AttemptError {
    fn transient(error: SkimmerError) -> Self {
        Self { error, retryable: true }
    }

    fn permanent(error: SkimmerError) -> Self {
        Self { error, retryable: false }
    }
}

/// Hugging Face Inference API client
#[derive(Debug, Clone)]
pub struct InferenceClient {
    url: String,
    client: Client,
    retry: RetryPolicy,
}

impl InferenceClient {
    /// Create new client for a model endpoint
    pub fn new(url: impl Into<String>, timeout: Duration, retry: RetryPolicy) -> Result<Self> {
        let url = url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SkimmerError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!("Inference client initialized: {} (timeout {:?}, attempts {})", url, timeout, retry.max_attempts);
        Ok(Self { url, client, retry })
    }

    /// Create client from application config
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.summarization_url(),
            config.request_timeout(),
            RetryPolicy {
                max_attempts: config.max_attempts,
                backoff_factor: config.backoff_factor,
            },
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Summarize with retry on transient failures
    async fn summarize_with_retry(&self, api_token: &str, request: &SummarizationRequest) -> Result<String> {
        let max_attempts = self.retry.max_attempts.max(1);

        debug!(
            "Querying summarization model - Input length: {} chars",
            request.inputs.chars().count()
        );

        for attempt in 1..=max_attempts {
            match self.try_summarize(api_token, request).await {
                Ok(summary) => {
                    debug!("Received summary - Length: {} chars", summary.len());
                    return Ok(summary);
                }
                Err(failure) if failure.retryable && attempt < max_attempts => {
                    let delay = self.retry.delay_after(attempt);
                    warn!(
                        "Summarization request failed (attempt {}/{}): {}. Retrying in {:?}...",
                        attempt, max_attempts, failure.error, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(failure) => {
                    warn!(
                        "Summarization request failed (attempt {}/{}): {}",
                        attempt, max_attempts, failure.error
                    );
                    return Err(failure.error);
                }
            }
        }

        Err(SkimmerError::model_request(
            "Summarization model query failed after multiple retries.",
        ))
    }

    /// Single attempt
    async fn try_summarize(
        &self,
        api_token: &str,
        request: &SummarizationRequest,
    ) -> std::result::Result<String, AttemptError> {
        let response = match self
            .client
            .post(&self.url)
            .bearer_auth(api_token)
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let error = SkimmerError::model_request(e.to_string());
                return Err(if e.is_timeout() || e.is_connect() || e.is_request() {
                    AttemptError::transient(error)
                } else {
                    AttemptError::permanent(error)
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = SkimmerError::model_request(format!("HTTP {}: {}", status, body.trim()));
            return Err(if is_transient_status(status) {
                AttemptError::transient(error)
            } else {
                AttemptError::permanent(error)
            });
        }

        let body = response.text().await.map_err(|e| {
            let error = SkimmerError::model_request(e.to_string());
            if e.is_timeout() {
                AttemptError::transient(error)
            } else {
                AttemptError::permanent(error)
            }
        })?;

        parse_summary_response(&body).map_err(AttemptError::permanent)
    }
}

/// Rate limiting and server-side failures, including the 503 sent while a model loads
fn is_transient_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[async_trait]
impl SummarizationBackend for InferenceClient {
    async fn summarize(&self, api_token: &str, request: &SummarizationRequest) -> Result<String> {
        self.summarize_with_retry(api_token, request).await
    }
}
