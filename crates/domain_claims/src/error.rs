//! Claims domain errors

use thiserror::Error;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim not found: {0}")]
    ClaimNotFound(String),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("This claim has already been processed")]
    AlreadyProcessed,

    #[error("Invalid action '{0}', expected 'approve' or 'reject'")]
    InvalidAction(String),

    #[error("Unknown claim status '{0}'")]
    InvalidStatus(String),

    #[error("Claim justification must not be empty")]
    EmptyDescription,

    #[error("Store error: {0}")]
    Store(String),
}

impl ClaimError {
    pub fn store(message: impl std::fmt::Display) -> Self {
        ClaimError::Store(message.to_string())
    }
}
