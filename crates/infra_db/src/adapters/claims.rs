//! Claims domain adapter
//!
//! Implements the claims domain ports on top of the PostgreSQL
//! repositories, translating between row types and domain models.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use core_kernel::{ClaimId, ItemId, UserId};
use domain_claims::{ClaimError, ClaimForResolution, ClaimResolved, ClaimStatus, ClaimStore, ResolutionSubscriber};

use crate::repositories::{ClaimsRepository, ItemRepository, NotificationRepository};

/// PostgreSQL-backed implementation of the claim lifecycle store
#[derive(Debug, Clone)]
pub struct PostgresClaimStore {
    claims: ClaimsRepository,
    items: ItemRepository,
}

impl PostgresClaimStore {
    pub fn new(claims: ClaimsRepository, items: ItemRepository) -> Self {
        Self { claims, items }
    }
}

#[async_trait]
impl ClaimStore for PostgresClaimStore {
    async fn load_for_resolution(
        &self,
        claim_id: ClaimId,
    ) -> Result<Option<ClaimForResolution>, ClaimError> {
        let row = self
            .claims
            .get_for_resolution(Uuid::from(claim_id))
            .await
            .map_err(ClaimError::store)?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(ClaimForResolution {
            claim_id: ClaimId::from(row.claim_id),
            item_id: ItemId::from(row.item_id),
            item_name: row.item_name,
            claimer_id: UserId::new(row.claimer_id),
            claimer_email: row.claimer_email,
            claimer_name: row.claimer_name,
            status: row.status.parse()?,
        }))
    }

    async fn resolve_if_pending(
        &self,
        claim_id: ClaimId,
        status: ClaimStatus,
        resolved_at: DateTime<Utc>,
    ) -> Result<bool, ClaimError> {
        self.claims
            .resolve_if_pending(Uuid::from(claim_id), status.as_str(), resolved_at)
            .await
            .map_err(ClaimError::store)
    }

    async fn mark_item_claimed(&self, item_id: ItemId) -> Result<(), ClaimError> {
        self.items
            .mark_claimed(Uuid::from(item_id))
            .await
            .map_err(ClaimError::store)
    }
}

/// Resolution subscriber that appends the outcome to the claimer's
/// notification feed
#[derive(Debug, Clone)]
pub struct NotificationFeedSubscriber {
    notifications: NotificationRepository,
}

impl NotificationFeedSubscriber {
    pub fn new(notifications: NotificationRepository) -> Self {
        Self { notifications }
    }
}

#[async_trait]
impl ResolutionSubscriber for NotificationFeedSubscriber {
    fn name(&self) -> &'static str {
        "notification-feed"
    }

    async fn on_claim_resolved(&self, event: &ClaimResolved) -> Result<(), ClaimError> {
        self.notifications
            .append(event.claimer_id.as_str(), &event.activity_message())
            .await
            .map_err(ClaimError::store)?;
        Ok(())
    }
}
