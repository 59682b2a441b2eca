use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Summarize form / JSON request
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SummarizeForm {
    /// URL or pasted text
    #[serde(default)]
    pub user_input: String,
}

/// Status message category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    Info,
    Success,
    Warning,
    Danger,
}

impl MessageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Map `SkimmerError::category` back to the enum
    pub fn from_error_category(category: &str) -> Self {
        match category {
            "warning" => Self::Warning,
            "info" => Self::Info,
            "success" => Self::Success,
            _ => Self::Danger,
        }
    }
}

/// Status message tied to the current request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub category: MessageCategory,
    pub text: String,
}

impl StatusMessage {
    pub fn new(category: MessageCategory, text: impl Into<String>) -> Self {
        Self {
            category,
            text: text.into(),
        }
    }
}

/// Rendering payload for one request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryPayload {
    /// Summary sentences in source order
    pub bullet_points: Vec<String>,

    /// "From URL: ..." or "From Pasted Text"
    pub source_info: String,

    /// Status, warning and error messages
    pub messages: Vec<StatusMessage>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    pub token_configured: bool,
    pub timestamp: DateTime<Utc>,
}
