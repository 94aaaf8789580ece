//! SaveEmotionHandler - Command handler recording the selected emotion.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::EntryDate;
use crate::domain::history::{HistoryLog, HistoryRecord};
use crate::domain::session::{JournalSession, SessionError};
use crate::ports::{ClassifierError, PolarityClassifier};

/// Errors from the save step.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The session refused the operation (no selection, wrong state).
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Polarity classification failed; the save was aborted and no record
    /// was appended.
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Handler driving the save step of the journaling cycle.
pub struct SaveEmotionHandler {
    classifier: Arc<dyn PolarityClassifier>,
}

impl SaveEmotionHandler {
    pub fn new(classifier: Arc<dyn PolarityClassifier>) -> Self {
        Self { classifier }
    }

    /// Classifies the selected emotion and appends it to the history log.
    ///
    /// Classification happens before any mutation: a classifier failure
    /// leaves both the session and the log untouched. On success the record
    /// is appended, the session returns to `Idle` and all transient state
    /// (text, candidates, plan, selection) is cleared.
    pub async fn handle(
        &self,
        session: &mut JournalSession,
        log: &mut HistoryLog,
    ) -> Result<HistoryRecord, SaveError> {
        let label = session
            .selected_emotion()
            .ok_or(SessionError::NoSelection)?
            .to_string();

        let polarity = self.classifier.classify(&label).await?;

        let record = HistoryRecord::new(EntryDate::today(), label, polarity);
        log.append(record.clone());
        session.complete_save()?;

        tracing::info!(
            emotion = %record.label,
            polarity = record.polarity.value(),
            date = %record.date,
            "emotion recorded"
        );

        Ok(record)
    }
}
