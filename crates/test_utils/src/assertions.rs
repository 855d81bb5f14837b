//! Custom Test Assertions
//!
//! Assertion helpers that report the actual error kinds on failure.

use domain_person::{ErrorKind, FieldError, RegistrationError};

/// Asserts that `outcome` failed with an error of the given kind
///
/// # Panics
///
/// Panics if `outcome` is `Ok` or the error has a different kind
pub fn assert_error_kind<T, E>(outcome: Result<T, E>, expected: ErrorKind, kind_of: impl Fn(&E) -> ErrorKind)
where
    T: std::fmt::Debug,
{
    match outcome {
        Ok(value) => panic!("Expected {:?} error, got Ok({:?})", expected, value),
        Err(error) => {
            let actual = kind_of(&error);
            assert_eq!(actual, expected, "Expected {:?} error, got {:?}", expected, actual);
        }
    }
}

/// Asserts that `errors` holds exactly one error for `field`, of kind `expected`
pub fn assert_field_error(errors: &[FieldError], field: &str, expected: ErrorKind) {
    let matching: Vec<_> = errors.iter().filter(|e| e.field == field).collect();
    assert_eq!(
        matching.len(),
        1,
        "Expected exactly one error for '{}', found {:?}",
        field,
        errors
    );
    assert_eq!(
        matching[0].kind(),
        expected,
        "Wrong error kind for '{}': {}",
        field,
        matching[0]
    );
}

/// Unwraps the field errors of a failed registration
pub fn expect_rejected<T: std::fmt::Debug>(outcome: Result<T, RegistrationError>) -> Vec<FieldError> {
    match outcome {
        Ok(value) => panic!("Expected registration to be rejected, got {:?}", value),
        Err(error) => error.field_errors().to_vec(),
    }
}
