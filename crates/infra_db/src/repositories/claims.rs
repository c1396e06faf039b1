//! Claims repository implementation
//!
//! This module provides database access for ownership claims: submission,
//! the admin listing joined with item and user detail, and the
//! conditional pending -> resolved transition.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::DatabaseError;

/// Repository for managing claim data
///
/// The ClaimsRepository handles all database operations for the claim
/// lifecycle, from submission through resolution.
#[derive(Debug, Clone)]
pub struct ClaimsRepository {
    pool: PgPool,
}

impl ClaimsRepository {
    /// Creates a new ClaimsRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a claim by its identifier
    pub async fn get_by_id(&self, claim_id: Uuid) -> Result<ClaimRow, DatabaseError> {
        let claim = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT claim_id, item_id, founder_id, claimer_id, description,
                   status, resolved_at, created_at
            FROM claims
            WHERE claim_id = $1
            "#,
        )
        .bind(claim_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DatabaseError::not_found("Claim", claim_id))?;

        Ok(claim)
    }

    /// Creates a new pending claim
    pub async fn create(&self, claim: NewClaim) -> Result<ClaimRow, DatabaseError> {
        let claim_id = Uuid::now_v7();
        let now = Utc::now();

        let row = sqlx::query_as::<_, ClaimRow>(
            r#"
            INSERT INTO claims (
                claim_id, item_id, founder_id, claimer_id, description,
                status, resolved_at, created_at
            ) VALUES ($1, $2, $3, $4, $5, 'pending', NULL, $6)
            RETURNING claim_id, item_id, founder_id, claimer_id, description,
                      status, resolved_at, created_at
            "#,
        )
        .bind(claim_id)
        .bind(claim.item_id)
        .bind(&claim.founder_id)
        .bind(&claim.claimer_id)
        .bind(&claim.description)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Lists all claims newest first, joined with item and both user
    /// records for the admin panel
    pub async fn list_detailed(&self) -> Result<Vec<ClaimDetailRow>, DatabaseError> {
        let rows = sqlx::query_as::<_, ClaimDetailRow>(
            r#"
            SELECT
                c.claim_id, c.item_id, c.founder_id, c.claimer_id,
                c.description, c.status, c.resolved_at, c.created_at,
                i.name            AS item_name,
                i.category        AS item_category,
                i.description     AS item_description,
                i.date_lost       AS item_date_lost,
                i.location        AS item_location,
                i.image_url       AS item_image_url,
                i.status          AS item_status,
                cu.email          AS claimer_email,
                cu.full_name      AS claimer_name,
                fu.email          AS founder_email,
                fu.full_name      AS founder_name
            FROM claims c
            JOIN items i  ON i.item_id  = c.item_id
            JOIN users cu ON cu.user_id = c.claimer_id
            JOIN users fu ON fu.user_id = c.founder_id
            ORDER BY c.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Loads the denormalized view the resolution service needs
    pub async fn get_for_resolution(
        &self,
        claim_id: Uuid,
    ) -> Result<Option<ClaimResolutionRow>, DatabaseError> {
        let row = sqlx::query_as::<_, ClaimResolutionRow>(
            r#"
            SELECT
                c.claim_id, c.item_id, c.claimer_id, c.status,
                i.name       AS item_name,
                cu.email     AS claimer_email,
                cu.full_name AS claimer_name
            FROM claims c
            JOIN items i  ON i.item_id  = c.item_id
            JOIN users cu ON cu.user_id = c.claimer_id
            WHERE c.claim_id = $1
            "#,
        )
        .bind(claim_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// Conditionally resolves a claim, only if it is still pending.
    ///
    /// The status check and the write are a single statement, so two
    /// concurrent resolutions cannot both observe `pending`; exactly one
    /// caller sees a row updated.
    pub async fn resolve_if_pending(
        &self,
        claim_id: Uuid,
        status: &str,
        resolved_at: DateTime<Utc>,
    ) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE claims
            SET status = $2, resolved_at = $3
            WHERE claim_id = $1 AND status = 'pending'
            "#,
        )
        .bind(claim_id)
        .bind(status)
        .bind(resolved_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}

/// Database row for a claim
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimRow {
    pub claim_id: Uuid,
    pub item_id: Uuid,
    pub founder_id: String,
    pub claimer_id: String,
    pub description: String,
    pub status: String,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new claim
#[derive(Debug, Clone)]
pub struct NewClaim {
    pub item_id: Uuid,
    pub founder_id: String,
    pub claimer_id: String,
    pub description: String,
}

/// Claim row joined with item and user detail for the admin listing
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimDetailRow {
    pub claim_id: Uuid,
    pub item_id: Uuid,
    pub founder_id: String,
    pub claimer_id: String,
    pub description: String,
    pub status: String,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub item_name: String,
    pub item_category: String,
    pub item_description: String,
    pub item_date_lost: NaiveDate,
    pub item_location: String,
    pub item_image_url: Option<String>,
    pub item_status: String,
    pub claimer_email: String,
    pub claimer_name: String,
    pub founder_email: String,
    pub founder_name: String,
}

/// Denormalized claim view for the resolution service
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ClaimResolutionRow {
    pub claim_id: Uuid,
    pub item_id: Uuid,
    pub claimer_id: String,
    pub status: String,
    pub item_name: String,
    pub claimer_email: String,
    pub claimer_name: String,
}
