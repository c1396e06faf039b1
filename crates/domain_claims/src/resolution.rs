//! Claim resolution service
//!
//! Owns the pending -> resolved transition and its side-effect ordering:
//!
//! 1. conditional status write (authoritative, aborts on failure)
//! 2. `ClaimResolved` dispatched to subscribers (notification, email)
//! 3. item status cascade on approval
//!
//! Steps 2 and 3 are best-effort; their failures are logged at warn and
//! never surface to the caller once step 1 has committed.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use core_kernel::ClaimId;
use crate::claim::{ClaimStatus, ResolutionAction};
use crate::error::ClaimError;
use crate::events::ClaimResolved;
use crate::ports::{ClaimStore, ResolutionSubscriber};

/// Confirmation returned to the caller after a successful resolution
#[derive(Debug, Clone)]
pub struct ResolutionOutcome {
    pub claim_id: ClaimId,
    pub status: ClaimStatus,
    pub message: String,
}

/// Application service driving the claim lifecycle
pub struct ClaimResolutionService {
    store: Arc<dyn ClaimStore>,
    subscribers: Vec<Arc<dyn ResolutionSubscriber>>,
}

impl ClaimResolutionService {
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self {
            store,
            subscribers: Vec::new(),
        }
    }

    /// Registers a side-effect subscriber; dispatch order follows
    /// registration order.
    pub fn with_subscriber(mut self, subscriber: Arc<dyn ResolutionSubscriber>) -> Self {
        self.subscribers.push(subscriber);
        self
    }

    /// Resolves a pending claim with the given action.
    ///
    /// # Errors
    ///
    /// * `ClaimNotFound` when the claim id resolves to nothing
    /// * `AlreadyProcessed` when the claim has left `pending`, including
    ///   the case where a concurrent request won the conditional write
    /// * `Store` when the authoritative write itself fails
    pub async fn process(
        &self,
        claim_id: ClaimId,
        action: ResolutionAction,
    ) -> Result<ResolutionOutcome, ClaimError> {
        let claim = self
            .store
            .load_for_resolution(claim_id)
            .await?
            .ok_or_else(|| ClaimError::ClaimNotFound(claim_id.to_string()))?;

        if claim.status != ClaimStatus::Pending {
            return Err(ClaimError::AlreadyProcessed);
        }

        let resolved_at = Utc::now();
        let status = action.target_status();

        // Authoritative transition: conditional on the row still being
        // pending, so two concurrent resolutions cannot both commit.
        let applied = self
            .store
            .resolve_if_pending(claim_id, status, resolved_at)
            .await?;
        if !applied {
            return Err(ClaimError::AlreadyProcessed);
        }

        info!(claim_id = %claim_id, status = %status, "claim resolved");

        let event = ClaimResolved {
            claim_id,
            item_id: claim.item_id,
            item_name: claim.item_name,
            claimer_id: claim.claimer_id,
            claimer_email: claim.claimer_email,
            claimer_name: claim.claimer_name,
            action,
            resolved_at,
        };

        for subscriber in &self.subscribers {
            if let Err(e) = subscriber.on_claim_resolved(&event).await {
                warn!(
                    claim_id = %claim_id,
                    subscriber = subscriber.name(),
                    error = %e,
                    "resolution side effect failed"
                );
            }
        }

        if action == ResolutionAction::Approve {
            if let Err(e) = self.store.mark_item_claimed(event.item_id).await {
                warn!(
                    claim_id = %claim_id,
                    item_id = %event.item_id,
                    error = %e,
                    "item status cascade failed"
                );
            }
        }

        Ok(ResolutionOutcome {
            claim_id,
            status,
            message: format!("Claim {} successfully", action.past_tense()),
        })
    }
}
