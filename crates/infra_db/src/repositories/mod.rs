//! Repository implementations for domain entities
//!
//! This module provides concrete repository implementations that handle
//! database access for each domain aggregate. Repositories encapsulate
//! SQL queries and map between database rows and domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Runtime-checked SQLx queries (the workspace builds without a live database)
//! - Conditional updates where the domain needs at-most-once semantics
//! - Row types kept separate from domain aggregates

pub mod users;
pub mod items;
pub mod claims;
pub mod notifications;
pub mod chat;

pub use users::UserRepository;
pub use items::{ItemRepository, ItemStatus, StatusCounts};
pub use claims::ClaimsRepository;
pub use notifications::NotificationRepository;
pub use chat::ChatRepository;
