//! AnalyzeEntryHandler - Command handler for one analysis cycle.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::analysis::{analysis_prompt, AnalysisOutcome, AnalysisParseError};
use crate::domain::session::{JournalSession, SessionError};
use crate::ports::{AiError, AiProvider, CompletionRequest, MessageRole, RequestMetadata};

/// Generic failure notice shown to the user when an analysis fails.
///
/// Transport, parse and validation failures all collapse into this one
/// message at the presentation boundary; the typed error carries the detail
/// for logs.
pub const ANALYSIS_FAILURE_NOTICE: &str = "분석에 실패했습니다.";

/// Default sampling temperature for analysis requests.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Errors from one analysis cycle.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The session refused the operation (blank text, request in flight).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The request to the model endpoint failed.
    #[error("analysis request failed: {0}")]
    Provider(#[from] AiError),

    /// The model answered but the response was unusable.
    #[error("analysis response rejected: {0}")]
    Response(#[from] AnalysisParseError),
}

/// Handler driving the analyze step of the journaling cycle.
pub struct AnalyzeEntryHandler {
    provider: Arc<dyn AiProvider>,
    temperature: f32,
}

impl AnalyzeEntryHandler {
    /// Creates a handler with the default temperature.
    pub fn new(provider: Arc<dyn AiProvider>) -> Self {
        Self {
            provider,
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Overrides the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Runs one analysis cycle against the session.
    ///
    /// On success the session moves to `Reviewing` with candidates and plan
    /// populated. On any failure after the request was started, the session
    /// returns to `Idle` with the entry text preserved and the typed error is
    /// surfaced; no partial results are kept.
    pub async fn handle(&self, session: &mut JournalSession) -> Result<(), AnalysisError> {
        session.begin_analysis()?;

        let metadata = RequestMetadata::new();
        let trace_id = metadata.trace_id.clone();
        let request = CompletionRequest::new(metadata)
            .with_message(MessageRole::User, analysis_prompt(session.text()))
            .with_temperature(self.temperature);

        tracing::debug!(trace_id = %trace_id, "requesting emotion analysis");

        let response = match self.provider.complete(request).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(trace_id = %trace_id, "analysis request failed: {}", err);
                session.fail_analysis()?;
                return Err(err.into());
            }
        };

        match AnalysisOutcome::from_model_output(&response.content) {
            Ok(outcome) => {
                tracing::debug!(
                    trace_id = %trace_id,
                    model = %response.model,
                    candidates = outcome.candidates.len(),
                    "analysis completed"
                );
                session.complete_analysis(outcome)?;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(trace_id = %trace_id, "analysis response rejected: {}", err);
                session.fail_analysis()?;
                Err(err.into())
            }
        }
    }
}
