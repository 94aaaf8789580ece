//! Polarity Classifier Port - one capability: classify an emotion label's
//! valence.
//!
//! Exactly one implementation is wired at a time. Classification must be
//! deterministic for the same label within a run so the chart's y-axis
//! semantics stay stable.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::emotion::Polarity;

/// Port for valence classification of emotion labels.
#[async_trait]
pub trait PolarityClassifier: Send + Sync {
    /// Classifies a label as positive, neutral or negative.
    async fn classify(&self, label: &str) -> Result<Polarity, ClassifierError>;
}

/// Classification errors.
///
/// The lexicon implementation never fails; the variant exists so fallible
/// implementations fit behind the same port. A failure during save aborts
/// the save without appending a record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("classification unavailable: {0}")]
    Unavailable(String),
}
