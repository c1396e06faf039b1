//! Claim domain events
//!
//! The authoritative status write and its best-effort side effects are
//! decoupled: the resolution service commits the transition, then emits a
//! `ClaimResolved` event to its subscribers (notification append, email).
//! Subscriber failures never reverse the committed transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, ItemId, UserId};
use crate::claim::ResolutionAction;

/// Emitted after a claim's pending -> resolved transition has committed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimResolved {
    pub claim_id: ClaimId,
    pub item_id: ItemId,
    pub item_name: String,
    pub claimer_id: UserId,
    pub claimer_email: String,
    pub claimer_name: String,
    pub action: ResolutionAction,
    pub resolved_at: DateTime<Utc>,
}

impl ClaimResolved {
    /// Activity line appended to the claimer's notification feed
    pub fn activity_message(&self) -> String {
        match self.action {
            ResolutionAction::Approve => {
                format!("Your claim for \"{}\" has been approved!", self.item_name)
            }
            ResolutionAction::Reject => {
                format!("Your claim for \"{}\" has been rejected.", self.item_name)
            }
        }
    }

    /// Subject line for the outcome email
    pub fn email_subject(&self) -> String {
        match self.action {
            ResolutionAction::Approve => {
                format!("Your claim for {} has been approved!", self.item_name)
            }
            ResolutionAction::Reject => {
                format!("Update on your claim for {}", self.item_name)
            }
        }
    }

    /// HTML body for the outcome email
    pub fn email_body(&self) -> String {
        match self.action {
            ResolutionAction::Approve => format!(
                "<h2>Congratulations {}!</h2>\
                 <p>Your claim for \"{}\" has been approved.</p>\
                 <p>You can now proceed with retrieving your item.</p>\
                 <p>Thank you for using Lost Realm!</p>",
                self.claimer_name, self.item_name
            ),
            ResolutionAction::Reject => format!(
                "<h2>Hello {},</h2>\
                 <p>We regret to inform you that your claim for \"{}\" has been rejected.</p>\
                 <p>If you believe this is a mistake, please submit a new claim with additional proof or information.</p>\
                 <p>Thank you for your understanding.</p>",
                self.claimer_name, self.item_name
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(action: ResolutionAction) -> ClaimResolved {
        ClaimResolved {
            claim_id: ClaimId::new_v7(),
            item_id: ItemId::new_v7(),
            item_name: "Blue Backpack".to_string(),
            claimer_id: UserId::new("user_claimer"),
            claimer_email: "claimer@campus.edu".to_string(),
            claimer_name: "Sam Okafor".to_string(),
            action,
            resolved_at: Utc::now(),
        }
    }

    #[test]
    fn approval_copy_names_the_item() {
        let e = event(ResolutionAction::Approve);
        assert_eq!(
            e.activity_message(),
            "Your claim for \"Blue Backpack\" has been approved!"
        );
        assert!(e.email_subject().contains("approved"));
        assert!(e.email_body().contains("Congratulations Sam Okafor"));
    }

    #[test]
    fn rejection_copy_names_the_item() {
        let e = event(ResolutionAction::Reject);
        assert_eq!(
            e.activity_message(),
            "Your claim for \"Blue Backpack\" has been rejected."
        );
        assert!(e.email_body().contains("rejected"));
    }
}
