//! Matching domain adapter

use async_trait::async_trait;

use domain_matching::{FoundItem, FoundItemSource, MatchError};

use crate::repositories::ItemRepository;

/// PostgreSQL-backed candidate source for the match selector
#[derive(Debug, Clone)]
pub struct PostgresFoundItemSource {
    items: ItemRepository,
}

impl PostgresFoundItemSource {
    pub fn new(items: ItemRepository) -> Self {
        Self { items }
    }
}

#[async_trait]
impl FoundItemSource for PostgresFoundItemSource {
    async fn found_items(&self) -> Result<Vec<FoundItem>, MatchError> {
        let rows = self
            .items
            .found_candidates()
            .await
            .map_err(MatchError::source)?;

        Ok(rows
            .into_iter()
            .map(|row| FoundItem {
                image_url: row.image_url,
                description: row.description,
                category: row.category,
                location: row.location,
            })
            .collect())
    }
}
