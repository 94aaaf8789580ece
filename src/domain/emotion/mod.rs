//! Emotion vocabulary: candidates, polarity, lexicons and action plans.

mod action_plan;
mod candidate;
mod lexicon;
mod polarity;

pub use action_plan::{ActionCategory, ActionItem, ActionPlan, EmotionPlan, RoutineSlot};
pub use candidate::EmotionCandidate;
pub use lexicon::{classify_label, NEGATIVE_LABELS, POSITIVE_LABELS};
pub use polarity::{InvalidPolarity, Polarity};
