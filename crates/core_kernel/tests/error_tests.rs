//! Tests for the shared error taxonomy

use core_kernel::CoreError;

#[test]
fn constructors_build_the_matching_variant() {
    assert!(matches!(
        CoreError::validation("description is empty"),
        CoreError::Validation(_)
    ));
    assert!(matches!(
        CoreError::not_found("claim 42"),
        CoreError::NotFound(_)
    ));
    assert!(matches!(
        CoreError::conflict("already processed"),
        CoreError::Conflict(_)
    ));
    assert!(matches!(
        CoreError::upstream("advisor timed out"),
        CoreError::Upstream(_)
    ));
}

#[test]
fn messages_carry_their_category() {
    assert_eq!(
        CoreError::validation("description is empty").to_string(),
        "Validation error: description is empty"
    );
    assert_eq!(
        CoreError::NotFound("claim 42".to_string()).to_string(),
        "Not found: claim 42"
    );
    assert_eq!(
        CoreError::Parse("unexpected token".to_string()).to_string(),
        "Parse error: unexpected token"
    );
}
