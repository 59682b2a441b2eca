use serde::{Deserialize, Serialize};
use serde_json::Value;
use skimmer_common::{Result, SkimmerError};

/// Inference API summarization request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SummarizationRequest {
    /// Text to summarize
    pub inputs: String,

    /// Generation parameters
    pub parameters: SummarizationParameters,
}

/// Generation parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizationParameters {
    /// Minimum summary length in tokens
    pub min_length: u32,

    /// Maximum summary length in tokens
    pub max_length: u32,

    /// Sampling; false means deterministic decoding
    pub do_sample: bool,
}

impl Default for SummarizationParameters {
    fn default() -> Self {
        Self {
            min_length: 60,
            max_length: 200,
            do_sample: false,
        }
    }
}

/// Summarization result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    /// Summary text as returned by the model
    pub text: String,

    /// Whether the input was cut to fit the model budget
    pub truncated: bool,

    /// Characters actually sent to the model
    pub input_chars: usize,

    /// Model used
    pub model: String,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Pull `summary_text` out of an inference API response body
///
/// The body must be a non-empty JSON array whose first element carries a
/// string `summary_text` field.
pub fn parse_summary_response(body: &str) -> Result<String> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SkimmerError::model_response(format!("invalid JSON: {}", e)))?;

    value
        .as_array()
        .and_then(|items| items.first())
        .and_then(|first| first.get("summary_text"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| SkimmerError::model_response(format!("unexpected response: {}", preview(body))))
}

fn preview(body: &str) -> String {
    const LIMIT: usize = 200;
    match body.char_indices().nth(LIMIT) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
