//! Lexicon-backed polarity classifier.
//!
//! The wired implementation of the PolarityClassifier port: exact matching
//! against the static positive/negative label sets. Deterministic and
//! infallible, which keeps the persisted polarity consistent with what a
//! local preview of the same label would show.

use async_trait::async_trait;

use crate::domain::emotion::{classify_label, Polarity};
use crate::ports::{ClassifierError, PolarityClassifier};

/// Classifier backed by the static polarity lexicons.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    /// Creates the classifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PolarityClassifier for LexiconClassifier {
    async fn classify(&self, label: &str) -> Result<Polarity, ClassifierError> {
        Ok(classify_label(label))
    }
}
