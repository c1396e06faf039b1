//! Comprehensive tests for domain_claims
//!
//! The resolution service is exercised against in-memory fakes of the
//! store and subscriber ports, covering the at-most-once guarantee and
//! the best-effort side-effect contract.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use proptest::prelude::*;

use core_kernel::{ClaimId, ItemId, UserId};
use domain_claims::{
    ClaimError, ClaimForResolution, ClaimResolutionService, ClaimResolved, ClaimStatus,
    ClaimStore, ResolutionAction, ResolutionSubscriber,
};
use test_utils::TestClaimBuilder;

// ============================================================================
// Fakes
// ============================================================================

#[derive(Default)]
struct FakeClaimStore {
    claims: Mutex<HashMap<ClaimId, ClaimForResolution>>,
    claimed_items: Mutex<Vec<ItemId>>,
    fail_resolve: AtomicBool,
    fail_cascade: AtomicBool,
    // Simulates losing the conditional-write race: load reports pending
    // but the compare-and-swap finds the row already resolved.
    lose_race: AtomicBool,
}

impl FakeClaimStore {
    fn with_claim(claim: ClaimForResolution) -> Arc<Self> {
        let store = Self::default();
        store
            .claims
            .lock()
            .unwrap()
            .insert(claim.claim_id, claim);
        Arc::new(store)
    }

    fn status_of(&self, claim_id: ClaimId) -> ClaimStatus {
        self.claims.lock().unwrap()[&claim_id].status
    }

    fn claimed_items(&self) -> Vec<ItemId> {
        self.claimed_items.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClaimStore for FakeClaimStore {
    async fn load_for_resolution(
        &self,
        claim_id: ClaimId,
    ) -> Result<Option<ClaimForResolution>, ClaimError> {
        Ok(self.claims.lock().unwrap().get(&claim_id).cloned())
    }

    async fn resolve_if_pending(
        &self,
        claim_id: ClaimId,
        status: ClaimStatus,
        _resolved_at: DateTime<Utc>,
    ) -> Result<bool, ClaimError> {
        if self.fail_resolve.load(Ordering::SeqCst) {
            return Err(ClaimError::store("connection reset"));
        }
        if self.lose_race.load(Ordering::SeqCst) {
            return Ok(false);
        }
        let mut claims = self.claims.lock().unwrap();
        match claims.get_mut(&claim_id) {
            Some(claim) if claim.status == ClaimStatus::Pending => {
                claim.status = status;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Ok(false),
        }
    }

    async fn mark_item_claimed(&self, item_id: ItemId) -> Result<(), ClaimError> {
        if self.fail_cascade.load(Ordering::SeqCst) {
            return Err(ClaimError::store("item row locked"));
        }
        self.claimed_items.lock().unwrap().push(item_id);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingSubscriber {
    events: Mutex<Vec<ClaimResolved>>,
    fail: AtomicBool,
}

impl RecordingSubscriber {
    fn failing() -> Arc<Self> {
        let s = Self::default();
        s.fail.store(true, Ordering::SeqCst);
        Arc::new(s)
    }

    fn events(&self) -> Vec<ClaimResolved> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResolutionSubscriber for RecordingSubscriber {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn on_claim_resolved(&self, event: &ClaimResolved) -> Result<(), ClaimError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(ClaimError::store("delivery refused"));
        }
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

fn service_with(
    store: Arc<FakeClaimStore>,
    subscribers: &[Arc<RecordingSubscriber>],
) -> ClaimResolutionService {
    let mut service = ClaimResolutionService::new(store);
    for s in subscribers {
        service = service.with_subscriber(s.clone() as Arc<dyn ResolutionSubscriber>);
    }
    service
}

// ============================================================================
// Resolution Tests
// ============================================================================

#[tokio::test]
async fn approve_resolves_claim_and_cascades_item() {
    let claim = TestClaimBuilder::new().with_item_name("Blue Backpack").build();
    let claim_id = claim.claim_id;
    let item_id = claim.item_id;
    let store = FakeClaimStore::with_claim(claim);
    let subscriber = Arc::new(RecordingSubscriber::default());
    let service = service_with(store.clone(), &[subscriber.clone()]);

    let outcome = service
        .process(claim_id, ResolutionAction::Approve)
        .await
        .unwrap();

    assert_eq!(outcome.message, "Claim approved successfully");
    assert_eq!(outcome.status, ClaimStatus::Approved);
    assert_eq!(store.status_of(claim_id), ClaimStatus::Approved);
    assert_eq!(store.claimed_items(), vec![item_id]);

    let events = subscriber.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].activity_message(),
        "Your claim for \"Blue Backpack\" has been approved!"
    );
}

#[tokio::test]
async fn reject_leaves_item_untouched() {
    let claim = TestClaimBuilder::new().build();
    let claim_id = claim.claim_id;
    let store = FakeClaimStore::with_claim(claim);
    let subscriber = Arc::new(RecordingSubscriber::default());
    let service = service_with(store.clone(), &[subscriber.clone()]);

    let outcome = service
        .process(claim_id, ResolutionAction::Reject)
        .await
        .unwrap();

    assert_eq!(outcome.message, "Claim rejected successfully");
    assert_eq!(store.status_of(claim_id), ClaimStatus::Rejected);
    assert!(store.claimed_items().is_empty());
    assert_eq!(subscriber.events().len(), 1);
}

#[tokio::test]
async fn second_resolution_returns_conflict_without_side_effects() {
    let claim = TestClaimBuilder::new().build();
    let claim_id = claim.claim_id;
    let store = FakeClaimStore::with_claim(claim);
    let subscriber = Arc::new(RecordingSubscriber::default());
    let service = service_with(store.clone(), &[subscriber.clone()]);

    service
        .process(claim_id, ResolutionAction::Approve)
        .await
        .unwrap();
    let err = service
        .process(claim_id, ResolutionAction::Reject)
        .await
        .unwrap_err();

    assert!(matches!(err, ClaimError::AlreadyProcessed));
    assert_eq!(store.status_of(claim_id), ClaimStatus::Approved);
    // No second event, no second cascade
    assert_eq!(subscriber.events().len(), 1);
    assert_eq!(store.claimed_items().len(), 1);
}

#[tokio::test]
async fn already_resolved_claim_conflicts() {
    let claim = TestClaimBuilder::new()
        .with_status(ClaimStatus::Approved)
        .build();
    let claim_id = claim.claim_id;
    let store = FakeClaimStore::with_claim(claim);
    let service = service_with(store, &[]);

    let err = service
        .process(claim_id, ResolutionAction::Reject)
        .await
        .unwrap_err();
    assert!(matches!(err, ClaimError::AlreadyProcessed));
}

#[tokio::test]
async fn unknown_claim_is_not_found() {
    let store = Arc::new(FakeClaimStore::default());
    let service = service_with(store, &[]);

    let err = service
        .process(ClaimId::new_v7(), ResolutionAction::Approve)
        .await
        .unwrap_err();
    assert!(matches!(err, ClaimError::ClaimNotFound(_)));
}

#[tokio::test]
async fn losing_the_conditional_write_race_conflicts() {
    let claim = TestClaimBuilder::new().build();
    let claim_id = claim.claim_id;
    let store = FakeClaimStore::with_claim(claim);
    store.lose_race.store(true, Ordering::SeqCst);
    let subscriber = Arc::new(RecordingSubscriber::default());
    let service = service_with(store.clone(), &[subscriber.clone()]);

    let err = service
        .process(claim_id, ResolutionAction::Approve)
        .await
        .unwrap_err();

    assert!(matches!(err, ClaimError::AlreadyProcessed));
    assert!(subscriber.events().is_empty());
    assert!(store.claimed_items().is_empty());
}

#[tokio::test]
async fn failing_subscriber_does_not_block_resolution() {
    let claim = TestClaimBuilder::new().build();
    let claim_id = claim.claim_id;
    let item_id = claim.item_id;
    let store = FakeClaimStore::with_claim(claim);
    let failing = RecordingSubscriber::failing();
    let healthy = Arc::new(RecordingSubscriber::default());
    let service = service_with(store.clone(), &[failing.clone(), healthy.clone()]);

    let outcome = service
        .process(claim_id, ResolutionAction::Approve)
        .await
        .unwrap();

    assert_eq!(outcome.status, ClaimStatus::Approved);
    // Later subscribers still run, and the item cascade still happens
    assert_eq!(healthy.events().len(), 1);
    assert_eq!(store.claimed_items(), vec![item_id]);
}

#[tokio::test]
async fn cascade_failure_does_not_reverse_the_resolution() {
    let claim = TestClaimBuilder::new().build();
    let claim_id = claim.claim_id;
    let store = FakeClaimStore::with_claim(claim);
    store.fail_cascade.store(true, Ordering::SeqCst);
    let service = service_with(store.clone(), &[]);

    let outcome = service
        .process(claim_id, ResolutionAction::Approve)
        .await
        .unwrap();

    assert_eq!(outcome.status, ClaimStatus::Approved);
    assert_eq!(store.status_of(claim_id), ClaimStatus::Approved);
}

#[tokio::test]
async fn authoritative_write_failure_aborts() {
    let claim = TestClaimBuilder::new().build();
    let claim_id = claim.claim_id;
    let store = FakeClaimStore::with_claim(claim);
    store.fail_resolve.store(true, Ordering::SeqCst);
    let subscriber = Arc::new(RecordingSubscriber::default());
    let service = service_with(store.clone(), &[subscriber.clone()]);

    let err = service
        .process(claim_id, ResolutionAction::Approve)
        .await
        .unwrap_err();

    assert!(matches!(err, ClaimError::Store(_)));
    assert!(subscriber.events().is_empty());
}

// ============================================================================
// Action Parsing Properties
// ============================================================================

proptest! {
    #[test]
    fn only_approve_and_reject_parse(action in "[a-zA-Z]{1,12}") {
        prop_assume!(action != "approve" && action != "reject");
        prop_assert!(action.parse::<ResolutionAction>().is_err());
    }
}

#[test]
fn rejected_action_reports_the_offending_value() {
    let err = "delete".parse::<ResolutionAction>().unwrap_err();
    assert!(err.to_string().contains("delete"));
}

#[test]
fn event_copy_uses_builder_identities() {
    let claim = TestClaimBuilder::new()
        .with_claimer(UserId::new("user_claimer_42"), "sam@campus.edu", "Sam")
        .with_item_name("Silver Laptop")
        .build();
    assert_eq!(claim.claimer_email, "sam@campus.edu");
    assert_eq!(claim.item_name, "Silver Laptop");
}
