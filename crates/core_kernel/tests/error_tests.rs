//! Tests for core_kernel error types

use core_kernel::error::{require_non_blank, CoreError};
use core_kernel::PortError;

#[test]
fn test_core_error_validation() {
    let error = CoreError::validation("Invalid input");

    let CoreError::Validation(msg) = &error;
    assert_eq!(msg, "Invalid input");
    assert_eq!(error.to_string(), "Validation error: Invalid input");
}

#[test]
fn test_require_non_blank_accepts_unicode() {
    assert!(require_non_blank("name", "제주도").is_ok());
}

#[test]
fn test_require_non_blank_rejects_whitespace() {
    match require_non_blank("name", " \t\n") {
        Err(CoreError::Validation(msg)) => assert_eq!(msg, "name must not be blank"),
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_port_error_internal_has_no_source_by_default() {
    use std::error::Error;

    let error = PortError::internal("query failed");
    assert!(error.source().is_none());
    assert!(error.to_string().contains("query failed"));
}
