//! Skimmer summarization
//!
//! Hugging Face inference client, summarizer and sentence segmentation

mod client;
mod llm_trait;
mod sentences;
mod summarize;
mod types;

pub use client::{InferenceClient, RetryPolicy};
pub use llm_trait::SummarizationBackend;
pub use sentences::{segmenter_for, NaiveSegmenter, SentenceSegmenter, UnicodeSegmenter};
pub use summarize::{truncate_chars, Summarizer};
pub use types::{parse_summary_response, SummarizationParameters, SummarizationRequest, Summary};
