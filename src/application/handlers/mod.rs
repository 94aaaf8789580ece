//! Command handlers for the journaling cycle.

mod analyze_entry;
mod save_emotion;

pub use analyze_entry::{
    AnalysisError, AnalyzeEntryHandler, ANALYSIS_FAILURE_NOTICE, DEFAULT_TEMPERATURE,
};
pub use save_emotion::{SaveEmotionHandler, SaveError};
