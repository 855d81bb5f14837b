//! Tests for core_kernel error types

use core_kernel::error::CoreError;

#[test]
fn test_core_error_configuration() {
    let error = CoreError::configuration("Missing config");

    match error {
        CoreError::Configuration(ref msg) => assert_eq!(msg, "Missing config"),
        _ => panic!("Expected Configuration error"),
    }
    assert_eq!(error.to_string(), "Configuration error: Missing config");
}

#[test]
fn test_core_error_from_config_error() {
    let source = config::ConfigError::NotFound("min_interests".to_string());
    let core_error: CoreError = source.into();

    assert!(matches!(core_error, CoreError::ConfigSource(_)));
    assert!(core_error.to_string().starts_with("Configuration source error"));
}
