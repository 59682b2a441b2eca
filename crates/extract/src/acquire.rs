use skimmer_common::{Result, SkimmerError};
use std::sync::Arc;
use tracing::{info, warn};

use crate::fetcher::{FetchedPage, PageFetcher, PageKind};
use crate::html::extract_article_text;
use crate::types::{ArticleText, UserInput};

/// Turns classified user input into article text
#[derive(Clone)]
pub struct TextAcquirer {
    fetcher: Arc<dyn PageFetcher>,
}

impl TextAcquirer {
    /// Create new acquirer
    pub fn new(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { fetcher }
    }

    /// Resolve input to article text
    ///
    /// Pasted text is returned unchanged. URLs are fetched and the readable
    /// body is extracted, plain-text pages are used as served. An empty
    /// result is an error.
    pub async fn acquire(&self, input: &UserInput) -> Result<ArticleText> {
        match input {
            UserInput::Text(text) => Ok(ArticleText::new(text.clone())),
            UserInput::Url(url) => {
                info!("Scraping article from URL: {}", url);

                let page = self.fetcher.fetch(url).await.map_err(|e| {
                    warn!("Error scraping URL {}: {}", url, e);
                    e
                })?;

                let article = ArticleText::new(page_text(page).await?);
                if article.is_empty() {
                    warn!("No article text found at {}", url);
                    return Err(SkimmerError::EmptyArticle);
                }

                info!("Extracted article text - {} chars", article.char_count());
                Ok(article)
            }
        }
    }
}

async fn page_text(page: FetchedPage) -> Result<String> {
    match page.kind {
        PageKind::PlainText => Ok(page.body.trim().to_string()),
        PageKind::Html => {
            let html = page.body;
            // html5ever is CPU bound on large pages
            tokio::task::spawn_blocking(move || extract_article_text(&html))
                .await
                .map_err(|e| SkimmerError::parse(format!("extraction task failed: {}", e)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StaticFetcher {
        page: FetchedPage,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, _url: &str) -> Result<FetchedPage> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.page.clone())
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl PageFetcher for FailingFetcher {
        async fn fetch(&self, _url: &str) -> Result<FetchedPage> {
            Err(SkimmerError::fetch("dns error: failed to lookup address information"))
        }
    }

    fn acquirer_serving(page: FetchedPage) -> (TextAcquirer, Arc<StaticFetcher>) {
        let fetcher = Arc::new(StaticFetcher {
            page,
            calls: AtomicUsize::new(0),
        });
        (TextAcquirer::new(fetcher.clone()), fetcher)
    }

    fn acquirer_with(html: &str) -> (TextAcquirer, Arc<StaticFetcher>) {
        acquirer_serving(FetchedPage::html(html))
    }

    fn url(value: &str) -> UserInput {
        UserInput::Url(value.to_string())
    }

    #[tokio::test]
    async fn test_pasted_text_is_unchanged() {
        let (acquirer, fetcher) = acquirer_with("");
        let text = "Some pasted text.\n\nWith a second paragraph!";
        let article = acquirer.acquire(&UserInput::Text(text.to_string())).await.unwrap();
        assert_eq!(article.text, text);
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_plain_text_page_is_used_as_served() {
        let (acquirer, fetcher) = acquirer_serving(FetchedPage::plain_text(
            "  This is a plain text article served as text/plain with several words.\n",
        ));
        let article = acquirer.acquire(&url("https://example.com/notes.txt")).await.unwrap();
        assert_eq!(
            article.text,
            "This is a plain text article served as text/plain with several words."
        );
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_plain_text_page_is_empty_article() {
        let (acquirer, _) = acquirer_serving(FetchedPage::plain_text(" \n "));
        let err = acquirer.acquire(&url("https://example.com/empty.txt")).await.unwrap_err();
        assert!(matches!(err, SkimmerError::EmptyArticle));
    }

    #[tokio::test]
    async fn test_url_is_extracted() {
        let (acquirer, fetcher) =
            acquirer_with("<article><p>An article paragraph long enough to keep.</p></article>");
        let article = acquirer.acquire(&url("https://example.com/post")).await.unwrap();
        assert_eq!(article.text, "An article paragraph long enough to keep.");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_url_without_text_is_empty_article() {
        let (acquirer, _) = acquirer_with("<html><body><script>app()</script></body></html>");
        let err = acquirer.acquire(&url("https://example.com/spa")).await.unwrap_err();
        assert!(matches!(err, SkimmerError::EmptyArticle));
    }

    #[tokio::test]
    async fn test_fetch_error_is_propagated() {
        let acquirer = TextAcquirer::new(Arc::new(FailingFetcher));
        let err = acquirer.acquire(&url("http://bad.invalid/x")).await.unwrap_err();
        assert!(err.is_extraction());
        assert!(!err.to_string().is_empty());
    }
}
