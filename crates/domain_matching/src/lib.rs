//! Matching Domain
//!
//! Given a free-text lost-item description, this crate asks an external
//! text-generation service to pick the most plausible counterpart among
//! the currently reported found items, then re-grounds the model's answer
//! against the concrete candidate records.
//!
//! The result is advisory only: it never mutates any entity and carries a
//! three-level confidence so callers can present it accordingly.

pub mod candidate;
pub mod verdict;
pub mod prompt;
pub mod resolve;
pub mod selector;
pub mod error;

pub use candidate::{FoundItem, FoundItemSource};
pub use verdict::{Confidence, MatchResult, MatchVerdict};
pub use selector::{MatchAdvisor, MatchSelector};
pub use error::MatchError;
