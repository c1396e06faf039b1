//! Items repository implementation
//!
//! This module provides database access for the item catalog: report
//! submission, status-filtered browsing with aggregate counts, and the
//! claim-approval status cascade.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Item status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    /// Reported missing by its owner
    Lost,
    /// Handed in by a finder
    Found,
    /// Returned to an approved claimer
    Claimed,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Lost => "lost",
            ItemStatus::Found => "found",
            ItemStatus::Claimed => "claimed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(ItemStatus::Lost),
            "found" => Ok(ItemStatus::Found),
            "claimed" => Ok(ItemStatus::Claimed),
            other => Err(DatabaseError::decode("status", other)),
        }
    }
}

/// Aggregate item counts per status
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCounts {
    pub all: i64,
    pub lost: i64,
    pub found: i64,
    pub claimed: i64,
}

/// Repository for the item catalog
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Creates a new ItemRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves an item by its identifier
    pub async fn get_by_id(&self, item_id: Uuid) -> Result<ItemRow, DatabaseError> {
        let item = sqlx::query_as::<_, ItemRow>(
            r#"
            SELECT item_id, reporter_id, name, category, description,
                   date_lost, location, image_url, status, created_at
            FROM items
            WHERE item_id = $1
            "#,
        )
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Item", item_id))?;

        Ok(item)
    }

    /// Lists items newest first, optionally filtered by status, joined
    /// with the reporter's display detail
    pub async fn list(
        &self,
        status: Option<ItemStatus>,
    ) -> Result<Vec<ItemWithReporterRow>, DatabaseError> {
        let rows = match status {
            Some(status) => {
                sqlx::query_as::<_, ItemWithReporterRow>(
                    r#"
                    SELECT i.item_id, i.reporter_id, i.name, i.category, i.description,
                           i.date_lost, i.location, i.image_url, i.status, i.created_at,
                           u.full_name AS reporter_name, u.email AS reporter_email
                    FROM items i
                    JOIN users u ON u.user_id = i.reporter_id
                    WHERE i.status = $1
                    ORDER BY i.created_at DESC
                    "#,
                )
                .bind(status.as_str())
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ItemWithReporterRow>(
                    r#"
                    SELECT i.item_id, i.reporter_id, i.name, i.category, i.description,
                           i.date_lost, i.location, i.image_url, i.status, i.created_at,
                           u.full_name AS reporter_name, u.email AS reporter_email
                    FROM items i
                    JOIN users u ON u.user_id = i.reporter_id
                    ORDER BY i.created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(rows)
    }

    /// Returns aggregate counts per status across the whole catalog
    pub async fn status_counts(&self) -> Result<StatusCounts, DatabaseError> {
        let row = sqlx::query_as::<_, CountsRow>(
            r#"
            SELECT
                COUNT(*) AS all_count,
                COUNT(*) FILTER (WHERE status = 'lost') AS lost_count,
                COUNT(*) FILTER (WHERE status = 'found') AS found_count,
                COUNT(*) FILTER (WHERE status = 'claimed') AS claimed_count
            FROM items
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(StatusCounts {
            all: row.all_count,
            lost: row.lost_count,
            found: row.found_count,
            claimed: row.claimed_count,
        })
    }

    /// Inserts a newly reported item
    pub async fn create(&self, item: NewItem) -> Result<ItemRow, DatabaseError> {
        let item_id = Uuid::now_v7();
        let now = Utc::now();

        let row = sqlx::query_as::<_, ItemRow>(
            r#"
            INSERT INTO items (
                item_id, reporter_id, name, category, description,
                date_lost, location, image_url, status, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING item_id, reporter_id, name, category, description,
                      date_lost, location, image_url, status, created_at
            "#,
        )
        .bind(item_id)
        .bind(&item.reporter_id)
        .bind(&item.name)
        .bind(&item.category)
        .bind(&item.description)
        .bind(item.date_lost)
        .bind(&item.location)
        .bind(&item.image_url)
        .bind(item.status.as_str())
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Cascades an item to `claimed` after claim approval
    pub async fn mark_claimed(&self, item_id: Uuid) -> Result<(), DatabaseError> {
        sqlx::query(
            r#"
            UPDATE items
            SET status = 'claimed'
            WHERE item_id = $1
            "#,
        )
        .bind(item_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Retrieves the match-candidate fields of every found item
    ///
    /// Unbounded by design; the advisor prompt carries all candidates.
    pub async fn found_candidates(&self) -> Result<Vec<FoundCandidateRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, FoundCandidateRow>(
            r#"
            SELECT COALESCE(image_url, '') AS image_url, description, category, location
            FROM items
            WHERE status = 'found'
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}

/// Database row for an item
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ItemRow {
    pub item_id: Uuid,
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

/// Item row joined with reporter display detail
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ItemWithReporterRow {
    pub item_id: Uuid,
    pub reporter_id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub date_lost: NaiveDate,
    pub location: String,
    pub image_url: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub reporter_name: String,
    pub reporter_email: String,
}

/// Data for reporting a new item
#[derive(Debug, Clone)]
pub struct NewItem {
    pub reporter_id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub date_lost: NaiveDate,
    pub location: String,
    pub image_url: Option<String>,
    pub status: ItemStatus,
}

/// Match-candidate projection of a found item
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoundCandidateRow {
    pub image_url: String,
    pub description: String,
    pub category: String,
    pub location: String,
}

#[derive(Debug, sqlx::FromRow)]
struct CountsRow {
    all_count: i64,
    lost_count: i64,
    found_count: i64,
    claimed_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for status in [ItemStatus::Lost, ItemStatus::Found, ItemStatus::Claimed] {
            assert_eq!(status.as_str().parse::<ItemStatus>().unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_a_decode_error() {
        let err = "misplaced".parse::<ItemStatus>().unwrap_err();
        assert!(matches!(err, DatabaseError::DecodeFailed(_)));
    }
}
