//! Found-item candidates

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// A found-item record offered to the advisor as a match candidate
///
/// Only the fields the ranking prompt and the re-resolution heuristic
/// need; the full item row stays in the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoundItem {
    pub image_url: String,
    pub description: String,
    pub category: String,
    pub location: String,
}

/// Port supplying the current set of found items
///
/// The read is unbounded by design: the catalog is campus-sized and the
/// advisor prompt carries every candidate.
#[async_trait]
pub trait FoundItemSource: Send + Sync {
    async fn found_items(&self) -> Result<Vec<FoundItem>, MatchError>;
}
