//! Core error types used across the system

use thiserror::Error;

/// Core error taxonomy for the kernel
///
/// Every operation surfaces one of these five categories. Parse failures
/// from the advisory matching service are the one exception: they are
/// caught inside the selector and degrade to a "no match determined"
/// result instead of propagating.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        CoreError::Conflict(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        CoreError::Upstream(message.into())
    }
}
