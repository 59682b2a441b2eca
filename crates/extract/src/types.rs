use skimmer_common::{Result, SkimmerError};

/// Classified user submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// Address of an article page
    Url(String),

    /// Text pasted directly by the user
    Text(String),
}

impl UserInput {
    /// Classify raw form input
    ///
    /// Input is trimmed first. Anything starting with "http" (any case) is a URL,
    /// everything else is literal article text.
    pub fn classify(raw: &str) -> Result<Self> {
        let input = raw.trim();
        if input.is_empty() {
            return Err(SkimmerError::InputMissing);
        }

        let is_url = input
            .get(..4)
            .map(|prefix| prefix.eq_ignore_ascii_case("http"))
            .unwrap_or(false);

        if is_url {
            Ok(Self::Url(input.to_string()))
        } else {
            Ok(Self::Text(input.to_string()))
        }
    }

    /// Human-readable description of where the text came from
    pub fn source_info(&self) -> String {
        match self {
            Self::Url(url) => format!("From URL: {}", url),
            Self::Text(_) => "From Pasted Text".to_string(),
        }
    }
}

/// Article text ready for summarization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleText {
    pub text: String,
}

impl ArticleText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Length in characters
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
