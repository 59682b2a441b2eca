use skimmer_common::{AppConfig, Result, SkimmerError};
use skimmer_extract::{PageFetcher, TextAcquirer, UserInput};
use skimmer_llm::{segmenter_for, SentenceSegmenter, SummarizationBackend, Summarizer};
use std::sync::Arc;
use tracing::{info, warn};

use crate::types::{MessageCategory, StatusMessage, SummaryPayload};

const CONTENT_ACQUIRED: &str = "Content acquired. Generating summary...";
const INPUT_TRUNCATED: &str = "Input text was truncated to a reasonable length for the model.";
const SUMMARY_GENERATED: &str = "Summary generated successfully!";

/// Request workflow steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStep {
    AwaitingInput,
    Acquiring,
    Summarizing,
    Splitting,
    Done,
    Error,
}

/// Outcome of one request
#[derive(Debug)]
pub struct WorkflowOutcome {
    /// Terminal step, `Done` or `Error`
    pub step: WorkflowStep,

    /// Step that failed when `step` is `Error`
    pub failed_at: Option<WorkflowStep>,

    /// Terminal error, if any
    pub error: Option<SkimmerError>,

    pub payload: SummaryPayload,
}

impl WorkflowOutcome {
    fn new() -> Self {
        Self {
            step: WorkflowStep::AwaitingInput,
            failed_at: None,
            error: None,
            payload: SummaryPayload::default(),
        }
    }

    fn push(&mut self, category: MessageCategory, text: impl Into<String>) {
        self.payload.messages.push(StatusMessage::new(category, text));
    }

    pub fn is_success(&self) -> bool {
        self.step == WorkflowStep::Done
    }
}

/// Runs acquisition, summarization and sentence splitting for one request
pub struct RequestOrchestrator {
    acquirer: TextAcquirer,
    summarizer: Summarizer,
    segmenter: Arc<dyn SentenceSegmenter>,
}

impl RequestOrchestrator {
    /// Create new orchestrator
    pub fn new(
        acquirer: TextAcquirer,
        summarizer: Summarizer,
        segmenter: Arc<dyn SentenceSegmenter>,
    ) -> Self {
        Self {
            acquirer,
            summarizer,
            segmenter,
        }
    }

    /// Wire components from configuration
    pub fn from_config(
        config: &AppConfig,
        fetcher: Arc<dyn PageFetcher>,
        backend: Arc<dyn SummarizationBackend>,
    ) -> Self {
        Self::new(
            TextAcquirer::new(fetcher),
            Summarizer::new(config, backend),
            segmenter_for(config.sentence_segmenter),
        )
    }

    pub fn model(&self) -> &str {
        self.summarizer.model()
    }

    /// Process raw user input
    ///
    /// Never fails: errors end the workflow in `Error` with one message
    /// describing them and no bullet points.
    pub async fn run(&self, raw_input: &str) -> WorkflowOutcome {
        let mut outcome = WorkflowOutcome::new();

        match self.drive(raw_input, &mut outcome).await {
            Ok(bullet_points) => {
                info!("Workflow completed - {} bullet points", bullet_points.len());
                outcome.payload.bullet_points = bullet_points;
                outcome.push(MessageCategory::Success, SUMMARY_GENERATED);
                outcome.step = WorkflowStep::Done;
            }
            Err(e) => {
                warn!("Workflow failed at {:?}: {}", outcome.step, e);
                outcome.push(MessageCategory::from_error_category(e.category()), e.to_string());
                outcome.failed_at = Some(outcome.step);
                outcome.step = WorkflowStep::Error;
                outcome.error = Some(e);
            }
        }

        outcome
    }

    async fn drive(&self, raw_input: &str, outcome: &mut WorkflowOutcome) -> Result<Vec<String>> {
        // AwaitingInput
        let input = UserInput::classify(raw_input)?;
        outcome.payload.source_info = input.source_info();

        outcome.step = WorkflowStep::Acquiring;
        let article = self.acquirer.acquire(&input).await?;
        if article.is_empty() {
            return Err(SkimmerError::EmptyArticle);
        }
        outcome.push(MessageCategory::Info, CONTENT_ACQUIRED);

        outcome.step = WorkflowStep::Summarizing;
        // Reported before the call so it survives a failed request
        if self.summarizer.has_credentials() && self.summarizer.will_truncate(&article.text) {
            outcome.push(MessageCategory::Warning, INPUT_TRUNCATED);
        }
        let summary = self.summarizer.summarize(&article.text).await?;
        if summary.is_empty() {
            return Err(SkimmerError::NoSummary);
        }

        outcome.step = WorkflowStep::Splitting;
        Ok(self.segmenter.split(&summary.text))
    }
}
