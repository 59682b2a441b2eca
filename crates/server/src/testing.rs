//! Mock collaborators shared by the workflow and route tests

use async_trait::async_trait;
use skimmer_common::{AppConfig, Result, SkimmerError};
use skimmer_extract::{FetchedPage, PageFetcher};
use skimmer_llm::{SummarizationBackend, SummarizationRequest};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::state::AppState;
use crate::workflow::RequestOrchestrator;

enum Reply {
    Ok(String),
    Fail(Mutex<Option<SkimmerError>>),
}

impl Reply {
    fn take(&self) -> Result<String> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Fail(slot) => Err(slot
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| SkimmerError::config("mock error already consumed"))),
        }
    }
}

pub struct MockFetcher {
    reply: Reply,
    calls: AtomicUsize,
}

impl MockFetcher {
    pub fn serving(html: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Ok(html.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(error: SkimmerError) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(Mutex::new(Some(error))),
            calls: AtomicUsize::new(0),
        })
    }

    /// Fetcher that must not be called
    pub fn unused() -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(Mutex::new(Some(SkimmerError::fetch("unexpected fetch")))),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, _url: &str) -> Result<FetchedPage> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.take().map(FetchedPage::html)
    }
}

pub struct MockBackend {
    reply: Reply,
    calls: AtomicUsize,
    last_inputs: Mutex<Option<String>>,
}

impl MockBackend {
    pub fn replying(summary: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Ok(summary.to_string()),
            calls: AtomicUsize::new(0),
            last_inputs: Mutex::new(None),
        })
    }

    pub fn failing(error: SkimmerError) -> Arc<Self> {
        Arc::new(Self {
            reply: Reply::Fail(Mutex::new(Some(error))),
            calls: AtomicUsize::new(0),
            last_inputs: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_inputs(&self) -> Option<String> {
        self.last_inputs.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummarizationBackend for MockBackend {
    async fn summarize(&self, _api_token: &str, request: &SummarizationRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_inputs.lock().unwrap() = Some(request.inputs.clone());
        self.reply.take()
    }
}

pub fn test_config(token: Option<&str>) -> AppConfig {
    AppConfig {
        hf_api_token: token.map(str::to_string),
        ..AppConfig::default()
    }
}

pub fn orchestrator(
    token: Option<&str>,
    fetcher: Arc<MockFetcher>,
    backend: Arc<MockBackend>,
) -> RequestOrchestrator {
    RequestOrchestrator::from_config(&test_config(token), fetcher, backend)
}

pub fn app_state(token: Option<&str>, fetcher: Arc<MockFetcher>, backend: Arc<MockBackend>) -> Arc<AppState> {
    Arc::new(AppState::with_components(test_config(token), fetcher, backend))
}
