//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),

    #[error("A subscription request is already in flight")]
    SubmissionInFlight,
}

impl DomainError {
    /// Check if this error was caused by malformed user input
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::InvalidEmail(_))
    }
}
