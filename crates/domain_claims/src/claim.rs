//! Claim aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, ItemId, UserId};
use crate::error::ClaimError;

/// Claim status
///
/// `Pending` is the initial state; `Approved` and `Rejected` are terminal.
/// The only legal edges are `Pending -> Approved` and `Pending -> Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Awaiting an administrator's decision
    Pending,
    /// Ownership confirmed, item handed over
    Approved,
    /// Ownership not established
    Rejected,
}

impl ClaimStatus {
    /// Returns the lowercase wire/storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ClaimStatus::Pending),
            "approved" => Ok(ClaimStatus::Approved),
            "rejected" => Ok(ClaimStatus::Rejected),
            other => Err(ClaimError::InvalidStatus(other.to_string())),
        }
    }
}

/// The two resolution actions an administrator may take on a pending claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionAction {
    Approve,
    Reject,
}

impl ResolutionAction {
    /// The claim status this action resolves to
    pub fn target_status(&self) -> ClaimStatus {
        match self {
            ResolutionAction::Approve => ClaimStatus::Approved,
            ResolutionAction::Reject => ClaimStatus::Rejected,
        }
    }

    /// Past-tense label used in confirmation messages
    pub fn past_tense(&self) -> &'static str {
        match self {
            ResolutionAction::Approve => "approved",
            ResolutionAction::Reject => "rejected",
        }
    }
}

impl FromStr for ResolutionAction {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approve" => Ok(ResolutionAction::Approve),
            "reject" => Ok(ResolutionAction::Reject),
            other => Err(ClaimError::InvalidAction(other.to_string())),
        }
    }
}

/// An ownership claim on a reported item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Item being claimed
    pub item_id: ItemId,
    /// Identity that originally reported the item
    pub founder_id: UserId,
    /// Identity submitting the claim
    pub claimer_id: UserId,
    /// Free-text justification of ownership
    pub description: String,
    /// Status
    pub status: ClaimStatus,
    /// When the claim left `pending`, if it has
    pub resolved_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a new pending claim
    pub fn submit(
        item_id: ItemId,
        founder_id: UserId,
        claimer_id: UserId,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ClaimId::new_v7(),
            item_id,
            founder_id,
            claimer_id,
            description: description.into(),
            status: ClaimStatus::Pending,
            resolved_at: None,
            created_at: Utc::now(),
        }
    }

    /// Applies a resolution action, stamping the resolution time
    ///
    /// Fails with `AlreadyProcessed` when the claim has left `pending`;
    /// a claim resolves exactly once.
    pub fn resolve(&mut self, action: ResolutionAction) -> Result<(), ClaimError> {
        let target = action.target_status();
        if !self.can_transition_to(target) {
            return Err(ClaimError::AlreadyProcessed);
        }
        self.status = target;
        self.resolved_at = Some(Utc::now());
        Ok(())
    }

    /// Checks if transition is valid
    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Pending, Approved) | (Pending, Rejected)
        )
    }

    /// True while the claim still awaits a decision
    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_claim() -> Claim {
        Claim::submit(
            ItemId::new_v7(),
            UserId::new("user_founder"),
            UserId::new("user_claimer"),
            "It has my initials carved on the back",
        )
    }

    #[test]
    fn submit_starts_pending() {
        let claim = pending_claim();
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert!(claim.resolved_at.is_none());
    }

    #[test]
    fn approve_is_terminal() {
        let mut claim = pending_claim();
        claim.resolve(ResolutionAction::Approve).unwrap();
        assert_eq!(claim.status, ClaimStatus::Approved);
        assert!(claim.resolved_at.is_some());

        let err = claim.resolve(ResolutionAction::Reject).unwrap_err();
        assert!(matches!(err, ClaimError::AlreadyProcessed));
    }

    #[test]
    fn reject_is_terminal() {
        let mut claim = pending_claim();
        claim.resolve(ResolutionAction::Reject).unwrap();
        assert_eq!(claim.status, ClaimStatus::Rejected);
        assert!(claim.resolve(ResolutionAction::Approve).is_err());
    }

    #[test]
    fn action_parsing() {
        assert_eq!(
            "approve".parse::<ResolutionAction>().unwrap(),
            ResolutionAction::Approve
        );
        assert_eq!(
            "reject".parse::<ResolutionAction>().unwrap(),
            ResolutionAction::Reject
        );
        assert!("escalate".parse::<ResolutionAction>().is_err());
        // Case sensitive, matching the wire contract
        assert!("Approve".parse::<ResolutionAction>().is_err());
    }

    #[test]
    fn status_round_trip() {
        for status in [ClaimStatus::Pending, ClaimStatus::Approved, ClaimStatus::Rejected] {
            let parsed: ClaimStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }
}
