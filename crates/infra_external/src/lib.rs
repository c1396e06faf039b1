//! Outbound Service Clients
//!
//! Thin HTTP clients for the two external collaborators the core calls
//! out to: the transactional email API and the text-generation service
//! backing the match advisor. Both are treated as unreliable; email
//! failures are swallowed by the resolution pipeline and advisor
//! failures surface as upstream errors.

pub mod email;
pub mod advisor;
pub mod error;

pub use email::{EmailClient, EmailConfig, ResolutionEmailSubscriber};
pub use advisor::{AdvisorConfig, ChatCompletionAdvisor};
pub use error::ExternalError;
