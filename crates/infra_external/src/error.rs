//! Outbound client errors

use thiserror::Error;

/// Errors from the outbound HTTP clients
#[derive(Debug, Error)]
pub enum ExternalError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Service answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Service reply carried no content")]
    EmptyReply,
}

impl From<reqwest::Error> for ExternalError {
    fn from(err: reqwest::Error) -> Self {
        ExternalError::Request(err.to_string())
    }
}
