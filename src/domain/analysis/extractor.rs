//! Best-effort extraction of a JSON payload embedded in model output.
//!
//! The chat-completion service answers in natural language that is expected
//! to *contain* a JSON object. Extraction takes the substring between the
//! first `{` and the last `}` and parses it. Known limitation: a stray brace
//! in the surrounding prose shifts the boundary and the parse fails; that
//! case surfaces as [`ExtractionError::InvalidJson`] rather than being
//! silently repaired.

use thiserror::Error;

/// Errors from locating or parsing the embedded JSON object.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("embedded JSON is invalid: {0}")]
    InvalidJson(String),
}

/// Extracts the outermost JSON object from free-form model output.
///
/// Returns the parsed value of the substring spanning the first `{` through
/// the last `}` of `content`.
pub fn extract_json_object(content: &str) -> Result<serde_json::Value, ExtractionError> {
    let start = content.find('{').ok_or(ExtractionError::NoJsonObject)?;
    let end = content.rfind('}').ok_or(ExtractionError::NoJsonObject)?;
    if end < start {
        return Err(ExtractionError::NoJsonObject);
    }

    // Both braces are ASCII, so the byte indices are char boundaries.
    let candidate = &content[start..=end];
    serde_json::from_str(candidate).map_err(|e| ExtractionError::InvalidJson(e.to_string()))
}
