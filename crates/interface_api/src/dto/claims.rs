//! Claims DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use infra_db::repositories::claims::{ClaimDetailRow, ClaimRow};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateClaimRequest {
    pub item_id: Uuid,
    #[validate(length(min = 1, max = 2000, message = "description must be 1-2000 characters"))]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct ProcessClaimRequest {
    /// `approve` or `reject`
    pub action: String,
}

#[derive(Debug, Serialize)]
pub struct ProcessClaimResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ClaimResponse {
    pub id: Uuid,
    pub item_id: Uuid,
    pub founder_id: String,
    pub claimer_id: String,
    pub description: String,
    pub status: String,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<ClaimRow> for ClaimResponse {
    fn from(row: ClaimRow) -> Self {
        Self {
            id: row.claim_id,
            item_id: row.item_id,
            founder_id: row.founder_id,
            claimer_id: row.claimer_id,
            description: row.description,
            status: row.status,
            resolved_at: row.resolved_at,
            created_at: row.created_at,
        }
    }
}

/// Item fields embedded in the admin claim listing
#[derive(Debug, Serialize)]
pub struct ClaimItemSummary {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub description: String,
    pub date_lost: NaiveDate,
    pub location: String,
    pub image_url: Option<String>,
    pub status: String,
}

/// User fields embedded in the admin claim listing
#[derive(Debug, Serialize)]
pub struct ClaimUserSummary {
    pub id: String,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Serialize)]
pub struct ClaimDetailResponse {
    pub id: Uuid,
    pub description: String,
    pub status: String,
    pub resolved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub item: ClaimItemSummary,
    pub claimer: ClaimUserSummary,
    pub founder: ClaimUserSummary,
}

impl From<ClaimDetailRow> for ClaimDetailResponse {
    fn from(row: ClaimDetailRow) -> Self {
        Self {
            id: row.claim_id,
            description: row.description,
            status: row.status,
            resolved_at: row.resolved_at,
            created_at: row.created_at,
            item: ClaimItemSummary {
                id: row.item_id,
                name: row.item_name,
                category: row.item_category,
                description: row.item_description,
                date_lost: row.item_date_lost,
                location: row.item_location,
                image_url: row.item_image_url,
                status: row.item_status,
            },
            claimer: ClaimUserSummary {
                id: row.claimer_id,
                email: row.claimer_email,
                full_name: row.claimer_name,
            },
            founder: ClaimUserSummary {
                id: row.founder_id,
                email: row.founder_email,
                full_name: row.founder_name,
            },
        }
    }
}
