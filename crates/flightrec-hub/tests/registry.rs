use std::sync::Arc;

use flightrec_hub::{Hub, HubError, ValidationError};

#[test]
fn test_register_then_get_returns_same_instance() {
    let hub = Hub::new();
    let registered = hub.register_source("console", "Console", "Console messages").unwrap();
    let fetched = hub.source("console").unwrap();
    assert!(Arc::ptr_eq(&registered, &fetched));
    assert_eq!(fetched.name(), "Console");
    assert_eq!(fetched.description(), "Console messages");
}

#[test]
fn test_registration_is_idempotent() {
    let hub = Hub::new();
    let first = hub.register_source("a", "Source A", "The A source").unwrap();
    let second = hub.register_source("a", "Source A", "The A source").unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(hub.source_count().unwrap(), 1);
}

#[test]
fn test_duplicate_with_both_fields_differing_fails() {
    let hub = Hub::new();
    hub.register_source("a", "Source A", "The A source").unwrap();
    let err = hub
        .register_source("a", "different-name", "different-desc")
        .unwrap_err();
    assert!(matches!(err, HubError::DuplicateSource { .. }));
    assert_eq!(hub.source_count().unwrap(), 1);
}

#[test]
fn test_duplicate_with_one_field_matching_returns_existing() {
    // The mismatch policy only fails when *both* fields differ.
    let hub = Hub::new();
    let first = hub.register_source("a", "Source A", "The A source").unwrap();

    let by_desc = hub.register_source("a", "renamed", "The A source").unwrap();
    assert!(Arc::ptr_eq(&first, &by_desc));

    let by_name = hub.register_source("a", "Source A", "redescribed").unwrap();
    assert!(Arc::ptr_eq(&first, &by_name));
}

#[test]
fn test_source_ids_are_case_insensitive() {
    let hub = Hub::new();
    let registered = hub.register_source("Console", "Console", "Console messages").unwrap();
    let fetched = hub.source("CONSOLE").unwrap();
    assert!(Arc::ptr_eq(&registered, &fetched));
    assert_eq!(registered.id().as_str(), "console");
}

#[test]
fn test_invalid_id_is_rejected() {
    let hub = Hub::new();
    let err = hub.register_source("not ok!", "Name", "Desc").unwrap_err();
    assert!(matches!(
        err,
        HubError::Validation(ValidationError::PatternMismatch { .. })
    ));
}

#[test]
fn test_empty_name_and_description_are_rejected() {
    let hub = Hub::new();
    let err = hub.register_source("a", "", "Desc").unwrap_err();
    assert!(matches!(
        err,
        HubError::Validation(ValidationError::EmptyField { field: "name" })
    ));

    let err = hub.register_source("a", "Name", "").unwrap_err();
    assert!(matches!(
        err,
        HubError::Validation(ValidationError::EmptyField { field: "description" })
    ));

    assert_eq!(hub.source_count().unwrap(), 0);
}

#[test]
fn test_get_unregistered_source_fails() {
    let hub = Hub::new();
    let err = hub.source("missing").unwrap_err();
    assert!(matches!(err, HubError::SourceNotFound { .. }));
}

#[test]
fn test_hubs_are_isolated() {
    let hub_a = Hub::new();
    let hub_b = Hub::new();
    hub_a.register_source("console", "Console", "Console messages").unwrap();
    assert!(matches!(
        hub_b.source("console").unwrap_err(),
        HubError::SourceNotFound { .. }
    ));
}
