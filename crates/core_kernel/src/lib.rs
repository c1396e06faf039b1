//! Core Kernel - Foundational types for the lost & found system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed entity identifiers
//! - The shared error taxonomy surfaced by every operation

pub mod identifiers;
pub mod error;

pub use identifiers::{ItemId, ClaimId, NotificationId, MessageId, UserId};
pub use error::CoreError;
