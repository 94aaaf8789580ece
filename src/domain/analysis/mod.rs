//! Analysis cycle: prompt construction, payload extraction and validation.

mod extractor;
mod outcome;
mod prompt;

pub use extractor::{extract_json_object, ExtractionError};
pub use outcome::{AnalysisOutcome, AnalysisParseError, EXPECTED_CANDIDATES};
pub use prompt::analysis_prompt;
