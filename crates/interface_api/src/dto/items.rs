//! Item catalog DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use infra_db::repositories::items::{ItemRow, ItemWithReporterRow};
use infra_db::StatusCounts;

#[derive(Debug, Deserialize, Validate)]
pub struct ReportItemRequest {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "category must be 1-100 characters"))]
    pub category: String,
    #[validate(length(min = 1, max = 2000, message = "description must be 1-2000 characters"))]
    pub description: String,
    pub date_lost: NaiveDate,
    #[validate(length(min = 1, max = 200, message = "location must be 1-200 characters"))]
    pub location: String,
    pub image_url: Option<String>,
    /// `lost` or `found`; found reports must carry an image
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    /// `lost`, `found`, `claimed`, or `all` (the default)
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: Uuid,
    pub reporter_id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub date_lost: NaiveDate,
    pub location: String,
    pub image_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<ItemRow> for ItemResponse {
    fn from(row: ItemRow) -> Self {
        Self {
            id: row.item_id,
            reporter_id: row.reporter_id,
            name: row.name,
            category: row.category,
            description: row.description,
            date_lost: row.date_lost,
            location: row.location,
            image_url: row.image_url,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemWithReporterResponse {
    pub id: Uuid,
    pub reporter_id: String,
    pub reporter_name: String,
    pub reporter_email: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub date_lost: NaiveDate,
    pub location: String,
    pub image_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<ItemWithReporterRow> for ItemWithReporterResponse {
    fn from(row: ItemWithReporterRow) -> Self {
        Self {
            id: row.item_id,
            reporter_id: row.reporter_id,
            reporter_name: row.reporter_name,
            reporter_email: row.reporter_email,
            name: row.name,
            category: row.category,
            description: row.description,
            date_lost: row.date_lost,
            location: row.location,
            image_url: row.image_url,
            status: row.status,
            created_at: row.created_at,
        }
    }
}

/// Catalog-wide counts returned alongside every listing
#[derive(Debug, Serialize)]
pub struct ItemCountsResponse {
    pub all: i64,
    pub lost: i64,
    pub found: i64,
    pub claimed: i64,
}

impl From<StatusCounts> for ItemCountsResponse {
    fn from(counts: StatusCounts) -> Self {
        Self {
            all: counts.all,
            lost: counts.lost,
            found: counts.found,
            claimed: counts.claimed,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemsListResponse {
    pub items: Vec<ItemWithReporterResponse>,
    pub counts: ItemCountsResponse,
}
