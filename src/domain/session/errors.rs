//! Session errors.

use thiserror::Error;

use super::SessionStatus;
use crate::domain::foundation::ValidationError;

/// Errors raised by [`super::JournalSession`] operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("journal entry is empty")]
    EmptyEntry,

    #[error("cannot {action} while session is {status:?}")]
    InvalidState {
        action: &'static str,
        status: SessionStatus,
    },

    #[error("'{label}' is not among the current emotion candidates")]
    UnknownCandidate { label: String },

    #[error("no emotion selected")]
    NoSelection,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SessionError {
    /// Creates an invalid state error for the given action.
    pub fn invalid_state(action: &'static str, status: SessionStatus) -> Self {
        SessionError::InvalidState { action, status }
    }
}
