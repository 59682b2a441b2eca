use async_trait::async_trait;
use reqwest::{header, Client, Url};
use skimmer_common::{Result, SkimmerError};
use std::time::Duration;
use tracing::{debug, info};

/// User-Agent string identifying this fetcher
const USER_AGENT: &str = concat!("skimmer/", env!("CARGO_PKG_VERSION"));

/// How a fetched body should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Html,
    PlainText,
}

/// Downloaded page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub body: String,
    pub kind: PageKind,
}

impl FetchedPage {
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            kind: PageKind::Html,
        }
    }

    pub fn plain_text(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            kind: PageKind::PlainText,
        }
    }
}

/// Source of raw pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Download the page at `url`
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

/// reqwest-backed page fetcher
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// Create a fetcher with the given per-request timeout
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SkimmerError::config(format!("Failed to create HTTP client: {}", e)))?;

        info!("Page fetcher initialized: timeout={:?}", timeout);
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let parsed = Url::parse(url).map_err(|e| SkimmerError::parse(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SkimmerError::parse(format!("unsupported scheme '{}'", parsed.scheme())));
        }

        debug!("Fetching article page: {}", parsed);

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| SkimmerError::fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| SkimmerError::fetch(e.to_string()))?;

        // Untyped responses are parsed as HTML
        let kind = match response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            Some(content_type) => page_kind(content_type).ok_or_else(|| {
                SkimmerError::parse(format!("unsupported content type '{}'", content_type))
            })?,
            None => PageKind::Html,
        };

        let body = response
            .text()
            .await
            .map_err(|e| SkimmerError::parse(format!("could not decode page body: {}", e)))?;

        debug!("Fetched page - {} bytes ({:?})", body.len(), kind);
        Ok(FetchedPage { body, kind })
    }
}

fn page_kind(content_type: &str) -> Option<PageKind> {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    match mime.as_str() {
        "text/html" | "application/xhtml+xml" => Some(PageKind::Html),
        "text/plain" => Some(PageKind::PlainText),
        _ => None,
    }
}
