//! Skimmer text acquisition
//!
//! Classifies user input and pulls readable article text out of web pages

mod acquire;
mod fetcher;
mod html;
mod types;

pub use acquire::TextAcquirer;
pub use fetcher::{FetchedPage, HttpPageFetcher, PageFetcher, PageKind};
pub use html::extract_article_text;
pub use types::{ArticleText, UserInput};
