//! Application layer - Command handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports:
//! it owns no business rules itself, only the sequencing of session
//! transitions, provider calls and history mutation.

pub mod handlers;

pub use handlers::{
    AnalysisError, AnalyzeEntryHandler, SaveEmotionHandler, SaveError, ANALYSIS_FAILURE_NOTICE,
    DEFAULT_TEMPERATURE,
};
