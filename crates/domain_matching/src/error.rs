//! Matching domain errors

use thiserror::Error;

/// Errors that can occur in the matching domain
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Lost-item description must not be empty")]
    EmptyDescription,

    #[error("Advisor reply was not a valid match verdict: {0}")]
    Parse(String),

    #[error("Advisor call failed: {0}")]
    Advisor(String),

    #[error("Candidate lookup failed: {0}")]
    Source(String),
}

impl MatchError {
    pub fn advisor(message: impl std::fmt::Display) -> Self {
        MatchError::Advisor(message.to_string())
    }

    pub fn source(message: impl std::fmt::Display) -> Self {
        MatchError::Source(message.to_string())
    }
}
