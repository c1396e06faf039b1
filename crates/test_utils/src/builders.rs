//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use core_kernel::{ClaimId, ItemId, UserId};
use domain_claims::{ClaimForResolution, ClaimStatus};
use domain_matching::FoundItem;

use crate::fixtures::{ItemFixtures, UserFixtures};

/// Builder for the denormalized claim view the resolution service consumes
pub struct TestClaimBuilder {
    claim_id: ClaimId,
    item_id: ItemId,
    item_name: String,
    claimer_id: UserId,
    claimer_email: String,
    claimer_name: String,
    status: ClaimStatus,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder for a pending claim with default identities
    pub fn new() -> Self {
        Self {
            claim_id: ClaimId::new_v7(),
            item_id: ItemId::new_v7(),
            item_name: ItemFixtures::name().to_string(),
            claimer_id: UserFixtures::claimer(),
            claimer_email: UserFixtures::claimer_email().to_string(),
            claimer_name: UserFixtures::claimer_name().to_string(),
            status: ClaimStatus::Pending,
        }
    }

    /// Sets the claim status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the item name
    pub fn with_item_name(mut self, name: impl Into<String>) -> Self {
        self.item_name = name.into();
        self
    }

    /// Sets the claimer identity and contact detail
    pub fn with_claimer(
        mut self,
        claimer_id: UserId,
        email: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.claimer_id = claimer_id;
        self.claimer_email = email.into();
        self.claimer_name = name.into();
        self
    }

    /// Builds the claim view
    pub fn build(self) -> ClaimForResolution {
        ClaimForResolution {
            claim_id: self.claim_id,
            item_id: self.item_id,
            item_name: self.item_name,
            claimer_id: self.claimer_id,
            claimer_email: self.claimer_email,
            claimer_name: self.claimer_name,
            status: self.status,
        }
    }
}

/// Builder for found-item match candidates
pub struct TestFoundItemBuilder {
    image_url: String,
    description: String,
    category: String,
    location: String,
}

impl Default for TestFoundItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFoundItemBuilder {
    /// Creates a new builder with a recognizable default candidate
    pub fn new() -> Self {
        Self {
            image_url: ItemFixtures::image_path().to_string(),
            description: ItemFixtures::found_description().to_string(),
            category: "Electronics".to_string(),
            location: "Library".to_string(),
        }
    }

    /// Sets the bucket-relative or absolute image reference
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Sets the free-text description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the location
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Builds the candidate
    pub fn build(self) -> FoundItem {
        FoundItem {
            image_url: self.image_url,
            description: self.description,
            category: self.category,
            location: self.location,
        }
    }
}
