//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the
//! lost & found system. These fixtures are designed to be consistent
//! and predictable for unit tests.

use core_kernel::UserId;

/// Fixture for identity test data
pub struct UserFixtures;

impl UserFixtures {
    /// A student who reported an item
    pub fn founder() -> UserId {
        UserId::new("user_founder_01")
    }

    /// A student claiming someone else's reported item
    pub fn claimer() -> UserId {
        UserId::new("user_claimer_01")
    }

    /// An administrator processing claims
    pub fn admin() -> UserId {
        UserId::new("user_admin_01")
    }

    /// The claimer's contact email
    pub fn claimer_email() -> &'static str {
        "claimer@campus.edu"
    }

    /// The claimer's display name
    pub fn claimer_name() -> &'static str {
        "Sam Okafor"
    }
}

/// Fixture for catalog test data
pub struct ItemFixtures;

impl ItemFixtures {
    /// A recognizable item name
    pub fn name() -> &'static str {
        "Blue Backpack"
    }

    /// A found-item description with several significant words
    pub fn found_description() -> &'static str {
        "silver laptop with a dent on the lid"
    }

    /// A bucket-relative image reference
    pub fn image_path() -> &'static str {
        "/found/item.jpg"
    }
}
