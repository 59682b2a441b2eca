/// Skimmer error types
///
/// The request-level variants carry the exact message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum SkimmerError {
    /// Nothing was submitted
    #[error("Please enter a URL or paste some text.")]
    InputMissing,

    /// Page could not be downloaded
    #[error("Failed to download the URL. Please check that the address is reachable. Error: {0}")]
    Fetch(String),

    /// Page downloaded but no readable text was found
    #[error("Could not extract article text from the URL. The page might be empty or require JavaScript.")]
    EmptyArticle,

    /// URL or page body could not be parsed
    #[error("Failed to process the URL. Please check if it's a valid article URL. Error: {0}")]
    Parse(String),

    /// No usable API credential
    #[error("Error: Hugging Face API Token not configured.")]
    ConfigurationMissing,

    /// Transport failure or timeout talking to the model
    #[error("Error: Summarization API request failed. {0}")]
    ModelRequest(String),

    /// Model answered with an unexpected shape
    #[error("Error: Could not parse model response or no summary found. {0}")]
    ModelResponse(String),

    /// Model answered but the summary was empty
    #[error("The model did not return a summary.")]
    NoSummary,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SkimmerError {
    /// Create fetch error
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        Self::Fetch(msg.into())
    }

    /// Create parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Self::Parse(msg.into())
    }

    /// Create model request error
    pub fn model_request<S: Into<String>>(msg: S) -> Self {
        Self::ModelRequest(msg.into())
    }

    /// Create model response error
    pub fn model_response<S: Into<String>>(msg: S) -> Self {
        Self::ModelResponse(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Whether the error came from acquiring article text
    pub fn is_extraction(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::EmptyArticle | Self::Parse(_))
    }

    /// Message category used by the result page
    pub fn category(&self) -> &'static str {
        match self {
            Self::InputMissing | Self::NoSummary => "warning",
            _ => "danger",
        }
    }
}

// HTTP response conversion
impl SkimmerError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InputMissing => 400,
            Self::Parse(_) => 400,
            Self::EmptyArticle => 422,
            Self::Fetch(_) => 502,
            Self::ConfigurationMissing => 500,
            Self::ModelRequest(_) => 502,
            Self::ModelResponse(_) => 502,
            Self::NoSummary => 502,
            Self::Config(_) => 500,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(
            SkimmerError::InputMissing.to_string(),
            "Please enter a URL or paste some text."
        );
        assert_eq!(
            SkimmerError::ConfigurationMissing.to_string(),
            "Error: Hugging Face API Token not configured."
        );
        assert!(SkimmerError::model_request("timed out")
            .to_string()
            .starts_with("Error: Summarization API request failed."));
    }

    #[test]
    fn test_extraction_errors_are_distinct() {
        let fetch = SkimmerError::fetch("dns error").to_string();
        let empty = SkimmerError::EmptyArticle.to_string();
        let parse = SkimmerError::parse("relative URL without a base").to_string();
        assert_ne!(fetch, empty);
        assert_ne!(empty, parse);
        assert_ne!(fetch, parse);

        assert!(SkimmerError::EmptyArticle.is_extraction());
        assert!(!SkimmerError::NoSummary.is_extraction());
    }

    #[test]
    fn test_category() {
        assert_eq!(SkimmerError::InputMissing.category(), "warning");
        assert_eq!(SkimmerError::NoSummary.category(), "warning");
        assert_eq!(SkimmerError::ConfigurationMissing.category(), "danger");
        assert_eq!(SkimmerError::fetch("x").category(), "danger");
    }

    #[test]
    fn test_status_code() {
        assert_eq!(SkimmerError::InputMissing.status_code(), 400);
        assert_eq!(SkimmerError::model_request("x").status_code(), 502);
        assert_eq!(SkimmerError::ConfigurationMissing.status_code(), 500);
    }
}
