use crate::error::SkimmerError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Token value shipped in sample configs
const PLACEHOLDER_TOKEN: &str = "HF_TOKEN";

/// Marker found in templated placeholder tokens
const PLACEHOLDER_MARKER: &str = "YOUR_NEW_HUGGING_FACE_API_TOKEN";

/// Largest accepted backoff factor in seconds
const MAX_BACKOFF_FACTOR: f64 = 60.0;

/// Sentence segmentation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    /// Unicode (UAX #29) sentence boundaries
    #[default]
    Unicode,
    /// Punctuation-based fallback
    Naive,
}

impl FromStr for SegmenterKind {
    type Err = SkimmerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unicode" => Ok(Self::Unicode),
            "naive" => Ok(Self::Naive),
            other => Err(SkimmerError::config(format!(
                "Unknown sentence segmenter '{}', expected 'unicode' or 'naive'",
                other
            ))),
        }
    }
}

/// Skimmer application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Hugging Face API token
    pub hf_api_token: Option<String>,

    /// Summarization model identifier
    pub model_id: String,

    /// Inference API base URL, the model id is appended to it
    pub inference_base_url: String,

    /// Maximum characters sent to the model
    pub max_input_chars: usize,

    /// Minimum summary length (model tokens)
    pub min_summary_length: u32,

    /// Maximum summary length (model tokens)
    pub max_summary_length: u32,

    /// Per-attempt timeout for the summarization call
    pub request_timeout_secs: u64,

    /// Total attempts for transient summarization failures
    pub max_attempts: u32,

    /// Exponential backoff factor in seconds
    pub backoff_factor: f64,

    /// Timeout for fetching article pages
    pub fetch_timeout_secs: u64,

    /// Sentence segmentation backend
    pub sentence_segmenter: SegmenterKind,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hf_api_token: None,
            model_id: "facebook/bart-large-cnn".to_string(),
            inference_base_url: "https://api-inference.huggingface.co/models".to_string(),
            max_input_chars: 1024 * 5,
            min_summary_length: 60,
            max_summary_length: 200,
            request_timeout_secs: 60,
            max_attempts: 3,
            backoff_factor: 0.5,
            fetch_timeout_secs: 30,
            sentence_segmenter: SegmenterKind::Unicode,
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, SkimmerError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();

        let sentence_segmenter = match std::env::var("SENTENCE_SEGMENTER") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.sentence_segmenter,
        };

        let config = Self {
            hf_api_token: std::env::var("HF_API_TOKEN").ok(),
            model_id: std::env::var("SUMMARIZATION_MODEL_ID").unwrap_or(defaults.model_id),
            inference_base_url: std::env::var("INFERENCE_BASE_URL")
                .unwrap_or(defaults.inference_base_url),
            max_input_chars: Self::get_env_parsed("MAX_INPUT_CHARS")
                .unwrap_or(defaults.max_input_chars),
            min_summary_length: Self::get_env_parsed("MIN_SUMMARY_LENGTH")
                .unwrap_or(defaults.min_summary_length),
            max_summary_length: Self::get_env_parsed("MAX_SUMMARY_LENGTH")
                .unwrap_or(defaults.max_summary_length),
            request_timeout_secs: Self::get_env_parsed("REQUEST_TIMEOUT_SECS")
                .unwrap_or(defaults.request_timeout_secs),
            max_attempts: Self::get_env_parsed("MAX_ATTEMPTS").unwrap_or(defaults.max_attempts),
            backoff_factor: Self::get_env_parsed("BACKOFF_FACTOR")
                .unwrap_or(defaults.backoff_factor),
            fetch_timeout_secs: Self::get_env_parsed("FETCH_TIMEOUT_SECS")
                .unwrap_or(defaults.fetch_timeout_secs),
            sentence_segmenter,
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT").unwrap_or(defaults.server_port),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        config.validate()?;

        Ok(config)
    }

    /// Parse an environment variable, ignoring unset or malformed values
    fn get_env_parsed<T: FromStr>(key: &str) -> Option<T> {
        std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Full summarization endpoint for the configured model
    pub fn summarization_url(&self) -> String {
        format!(
            "{}/{}",
            self.inference_base_url.trim_end_matches('/'),
            self.model_id.trim_start_matches('/')
        )
    }

    /// API token, if one is configured and is not a placeholder
    pub fn api_token(&self) -> Option<&str> {
        let token = self.hf_api_token.as_deref()?.trim();
        if token.is_empty() {
            return None;
        }
        if token == PLACEHOLDER_TOKEN || token.contains(PLACEHOLDER_MARKER) {
            return None;
        }
        Some(token)
    }

    /// Whether a usable API token is present
    pub fn has_api_token(&self) -> bool {
        self.api_token().is_some()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SkimmerError> {
        if self.model_id.trim().is_empty() {
            return Err(SkimmerError::config("Summarization model id cannot be empty"));
        }

        if !self.inference_base_url.starts_with("http://")
            && !self.inference_base_url.starts_with("https://")
        {
            return Err(SkimmerError::config(
                "Inference base URL must start with http:// or https://",
            ));
        }

        if self.max_input_chars == 0 {
            return Err(SkimmerError::config("Maximum input length cannot be 0"));
        }

        if self.min_summary_length > self.max_summary_length {
            return Err(SkimmerError::config(format!(
                "Minimum summary length ({}) exceeds maximum ({})",
                self.min_summary_length, self.max_summary_length
            )));
        }

        if self.max_attempts == 0 {
            return Err(SkimmerError::config("At least one request attempt is required"));
        }

        if !self.backoff_factor.is_finite() || self.backoff_factor < 0.0 {
            return Err(SkimmerError::config("Backoff factor must be a non-negative number"));
        }

        if self.backoff_factor > MAX_BACKOFF_FACTOR {
            return Err(SkimmerError::config(format!(
                "Backoff factor cannot exceed {} seconds",
                MAX_BACKOFF_FACTOR
            )));
        }

        if self.server_port == 0 {
            return Err(SkimmerError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
