//! Tests for strongly-typed identifiers

use core_kernel::{ClaimId, ItemId, MessageId, NotificationId, UserId};
use uuid::Uuid;

mod item_id_tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let id1 = ItemId::new();
        let id2 = ItemId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn v7_ids_are_time_ordered_in_creation() {
        let id1 = ItemId::new_v7();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = ItemId::new_v7();
        assert!(id1.as_uuid() < id2.as_uuid());
    }

    #[test]
    fn display_carries_the_prefix() {
        assert_eq!(ItemId::prefix(), "ITM");
        let id = ItemId::new();
        assert!(id.to_string().starts_with("ITM-"));
    }

    #[test]
    fn parses_with_and_without_prefix() {
        let original = ItemId::new();
        let parsed: ItemId = original.to_string().parse().unwrap();
        assert_eq!(parsed, original);

        let bare: ItemId = original.as_uuid().to_string().parse().unwrap();
        assert_eq!(bare, original);
    }

    #[test]
    fn uuid_round_trip() {
        let uuid = Uuid::now_v7();
        let id = ItemId::from_uuid(uuid);
        let back: Uuid = id.into();
        assert_eq!(back, uuid);
    }

    #[test]
    fn serializes_as_a_bare_uuid() {
        let id = ItemId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
        let parsed: ItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}

mod prefix_tests {
    use super::*;

    #[test]
    fn each_id_type_has_its_own_prefix() {
        assert_eq!(ClaimId::prefix(), "CLM");
        assert_eq!(NotificationId::prefix(), "NTF");
        assert_eq!(MessageId::prefix(), "MSG");
    }

    #[test]
    fn claim_ids_parse_their_own_display_form() {
        let id = ClaimId::new_v7();
        let parsed: ClaimId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }
}

mod user_id_tests {
    use super::*;

    #[test]
    fn wraps_the_provider_subject_untouched() {
        let id = UserId::new("user_2abcDEF");
        assert_eq!(id.as_str(), "user_2abcDEF");
        assert_eq!(id.to_string(), "user_2abcDEF");
    }

    #[test]
    fn serializes_transparently() {
        let id = UserId::new("user_2abcDEF");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"user_2abcDEF\"");
        let parsed: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn string_conversions() {
        let id = UserId::from("user_x");
        let s: String = id.clone().into();
        assert_eq!(s, "user_x");
        assert_eq!(UserId::from(s), id);
    }
}
