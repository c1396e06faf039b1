//! Port traits for the claims domain
//!
//! The domain depends only on these traits; adapters in `infra_db` and
//! `infra_external` provide the PostgreSQL store and the outbound email
//! delivery. Tests supply in-memory fakes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{ClaimId, ItemId, UserId};
use crate::claim::ClaimStatus;
use crate::error::ClaimError;
use crate::events::ClaimResolved;

/// Everything the resolution service needs to know about a claim,
/// denormalized with the item name and claimer contact detail the
/// side effects require.
#[derive(Debug, Clone)]
pub struct ClaimForResolution {
    pub claim_id: ClaimId,
    pub item_id: ItemId,
    pub item_name: String,
    pub claimer_id: UserId,
    pub claimer_email: String,
    pub claimer_name: String,
    pub status: ClaimStatus,
}

/// Store operations the claim lifecycle depends on
#[async_trait]
pub trait ClaimStore: Send + Sync {
    /// Loads a claim with joined item and claimer detail
    async fn load_for_resolution(
        &self,
        claim_id: ClaimId,
    ) -> Result<Option<ClaimForResolution>, ClaimError>;

    /// Conditionally resolves a claim: applies the status and resolution
    /// timestamp only if the row is still `pending`.
    ///
    /// Returns `false` when no row was updated, which means another
    /// resolution won the race. This compare-and-swap is the authoritative
    /// at-most-once guarantee; callers must not pre-write the status.
    async fn resolve_if_pending(
        &self,
        claim_id: ClaimId,
        status: ClaimStatus,
        resolved_at: DateTime<Utc>,
    ) -> Result<bool, ClaimError>;

    /// Cascades an approved claim's item to `claimed`
    async fn mark_item_claimed(&self, item_id: ItemId) -> Result<(), ClaimError>;
}

/// A best-effort consumer of `ClaimResolved` events
///
/// Subscribers run after the transition has committed; a failing
/// subscriber is logged and skipped, never propagated.
#[async_trait]
pub trait ResolutionSubscriber: Send + Sync {
    /// Short name used in warn logs when delivery fails
    fn name(&self) -> &'static str;

    async fn on_claim_resolved(&self, event: &ClaimResolved) -> Result<(), ClaimError>;
}
