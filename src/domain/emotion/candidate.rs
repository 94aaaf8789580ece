//! Emotion candidates produced by an analysis cycle.

use serde::{Deserialize, Serialize};

/// One emotion extracted from a journal entry.
///
/// The model may return candidates either as bare label strings or as objects
/// carrying an optional description and example; both wire forms deserialize
/// into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CandidateWire")]
pub struct EmotionCandidate {
    /// Emotion label, as returned by the model.
    pub label: String,
    /// Optional one-line description of the emotion.
    pub description: Option<String>,
    /// Optional example sentence from the entry.
    pub example: Option<String>,
}

impl EmotionCandidate {
    /// Creates a candidate from a bare label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            example: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the example.
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }
}

/// Wire forms accepted for a candidate.
#[derive(Deserialize)]
#[serde(untagged)]
enum CandidateWire {
    Label(String),
    Detailed {
        #[serde(rename = "이름")]
        label: String,
        #[serde(rename = "설명", default)]
        description: Option<String>,
        #[serde(rename = "예시", default)]
        example: Option<String>,
    },
}

impl From<CandidateWire> for EmotionCandidate {
    fn from(wire: CandidateWire) -> Self {
        match wire {
            CandidateWire::Label(label) => EmotionCandidate::new(label),
            CandidateWire::Detailed {
                label,
                description,
                example,
            } => EmotionCandidate {
                label,
                description,
                example,
            },
        }
    }
}
