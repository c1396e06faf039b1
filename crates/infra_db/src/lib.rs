//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the lost & found
//! service on PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern, providing data access
//! abstractions that hide the database implementation details from the
//! domain layer. The `adapters` module implements the domain port traits
//! on top of the repositories.
//!
//! Queries use the runtime SQLx API so the workspace builds without a
//! database connection; the schema lives in `migrations/`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, ClaimsRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/lostfound")).await?;
//! let repo = ClaimsRepository::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, create_pool_from_url, DatabaseConfig};
pub use error::DatabaseError;
pub use repositories::{
    ChatRepository, ClaimsRepository, ItemRepository, ItemStatus, NotificationRepository,
    StatusCounts, UserRepository,
};
pub use adapters::{NotificationFeedSubscriber, PostgresClaimStore, PostgresFoundItemSource};
