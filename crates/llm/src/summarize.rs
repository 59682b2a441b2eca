use skimmer_common::{AppConfig, Result, SkimmerError};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::llm_trait::SummarizationBackend;
use crate::types::{SummarizationParameters, SummarizationRequest, Summary};

/// Cut `text` to at most `max_chars` characters
///
/// Returns the kept prefix and whether anything was dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => (&text[..idx], true),
        None => (text, false),
    }
}

/// Summarizer bound to one model and credential
pub struct Summarizer {
    backend: Arc<dyn SummarizationBackend>,
    api_token: Option<String>,
    model: String,
    max_input_chars: usize,
    parameters: SummarizationParameters,
}

impl Summarizer {
    /// Create new summarizer
    pub fn new(config: &AppConfig, backend: Arc<dyn SummarizationBackend>) -> Self {
        Self {
            backend,
            api_token: config.api_token().map(str::to_string),
            model: config.model_id.clone(),
            max_input_chars: config.max_input_chars,
            parameters: SummarizationParameters {
                min_length: config.min_summary_length,
                max_length: config.max_summary_length,
                do_sample: false,
            },
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Whether a usable API token is configured
    pub fn has_credentials(&self) -> bool {
        self.api_token.is_some()
    }

    /// Whether `text` exceeds the model input budget and will be cut
    pub fn will_truncate(&self, text: &str) -> bool {
        truncate_chars(text, self.max_input_chars).1
    }

    /// Build the request payload, truncating the input to the model budget
    pub fn build_request(&self, text: &str) -> (SummarizationRequest, bool) {
        let (inputs, truncated) = truncate_chars(text, self.max_input_chars);
        let request = SummarizationRequest {
            inputs: inputs.to_string(),
            parameters: self.parameters,
        };
        (request, truncated)
    }

    /// Summarize text
    ///
    /// Fails with `ConfigurationMissing` before any request when no usable
    /// token is configured. An empty summary is returned as-is.
    pub async fn summarize(&self, text: &str) -> Result<Summary> {
        let Some(api_token) = self.api_token.as_deref() else {
            warn!("Summarization skipped: API token not configured");
            return Err(SkimmerError::ConfigurationMissing);
        };

        let (request, truncated) = self.build_request(text);
        let input_chars = request.inputs.chars().count();

        if truncated {
            info!(
                "Input truncated from {} to {} chars",
                text.chars().count(),
                input_chars
            );
        }

        info!("Starting summarization - Model: {}, Input length: {} chars", self.model, input_chars);

        let summary = self.backend.summarize(api_token, &request).await?;
        debug!("Summary length: {} chars", summary.len());

        Ok(Summary {
            text: summary.trim().to_string(),
            truncated,
            input_chars,
            model: self.model.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records requests and replies with a fixed summary
    struct RecordingBackend {
        reply: String,
        calls: AtomicUsize,
        last_request: Mutex<Option<SummarizationRequest>>,
    }

    impl RecordingBackend {
        fn new(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
                last_request: Mutex::new(None),
            })
        }
    }

    #[async_trait]
    impl SummarizationBackend for RecordingBackend {
        async fn summarize(&self, _api_token: &str, request: &SummarizationRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            Ok(self.reply.clone())
        }
    }

    fn config_with_token(token: Option<&str>) -> AppConfig {
        AppConfig {
            hf_api_token: token.map(str::to_string),
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), ("hello", false));
        assert_eq!(truncate_chars("hello", 5), ("hello", false));
        assert_eq!(truncate_chars("hello", 3), ("hel", true));
        // Character based, never splits a code point
        assert_eq!(truncate_chars("héllo wörld", 7), ("héllo w", true));
        assert_eq!(truncate_chars("", 0), ("", false));
    }

    #[test]
    fn test_will_truncate_matches_budget() {
        let summarizer = Summarizer::new(&config_with_token(Some("hf_test")), RecordingBackend::new("unused"));
        assert!(summarizer.has_credentials());
        assert!(!summarizer.will_truncate(&"a".repeat(5120)));
        assert!(summarizer.will_truncate(&"a".repeat(5121)));

        let summarizer = Summarizer::new(&config_with_token(None), RecordingBackend::new("unused"));
        assert!(!summarizer.has_credentials());
    }

    #[tokio::test]
    async fn test_missing_token_makes_no_call() {
        for token in [None, Some(""), Some("HF_TOKEN"), Some("YOUR_NEW_HUGGING_FACE_API_TOKEN")] {
            let backend = RecordingBackend::new("unused");
            let summarizer = Summarizer::new(&config_with_token(token), backend.clone());

            let err = summarizer.summarize("Some text.").await.unwrap_err();
            assert!(matches!(err, SkimmerError::ConfigurationMissing));
            assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
        }
    }

    #[tokio::test]
    async fn test_long_input_is_truncated_before_request() {
        let backend = RecordingBackend::new("Short summary.");
        let summarizer = Summarizer::new(&config_with_token(Some("hf_test")), backend.clone());

        let text = "a".repeat(6000);
        let summary = summarizer.summarize(&text).await.unwrap();

        assert!(summary.truncated);
        assert_eq!(summary.input_chars, 5120);

        let request = backend.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.inputs.chars().count(), 5120);
        assert_eq!(request.parameters, SummarizationParameters::default());
    }

    #[tokio::test]
    async fn test_short_input_is_sent_whole() {
        let backend = RecordingBackend::new("  Plain text summary.  ");
        let summarizer = Summarizer::new(&config_with_token(Some("hf_test")), backend.clone());

        let summary = summarizer.summarize("This is plain pasted text.").await.unwrap();

        assert!(!summary.truncated);
        assert_eq!(summary.text, "Plain text summary.");
        assert_eq!(summary.model, "facebook/bart-large-cnn");
        assert_eq!(backend.calls.load(Ordering::SeqCst), 1);
        let request = backend.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.inputs, "This is plain pasted text.");
    }

    #[tokio::test]
    async fn test_empty_summary_is_returned() {
        let backend = RecordingBackend::new("");
        let summarizer = Summarizer::new(&config_with_token(Some("hf_test")), backend);
        let summary = summarizer.summarize("Text.").await.unwrap();
        assert!(summary.is_empty());
    }
}
