//! Claims Management Domain
//!
//! This crate implements the ownership claim lifecycle: a student submits
//! a claim on a reported item, an administrator approves or rejects it,
//! and the outcome fans out to best-effort notifications.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Approved
//! Pending -> Rejected
//! ```
//!
//! Both resolved states are terminal; a claim resolves at most once.

pub mod claim;
pub mod events;
pub mod ports;
pub mod resolution;
pub mod error;

pub use claim::{Claim, ClaimStatus, ResolutionAction};
pub use events::ClaimResolved;
pub use ports::{ClaimForResolution, ClaimStore, ResolutionSubscriber};
pub use resolution::{ClaimResolutionService, ResolutionOutcome};
pub use error::ClaimError;
