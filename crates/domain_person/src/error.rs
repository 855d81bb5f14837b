//! Person domain errors
//!
//! Each value object has its own error enum so that a caller can match on
//! exactly the failures that object can produce. Every variant carries the
//! raw input that caused it, and [`ErrorKind`] gives a uniform way to
//! inspect any of them.

use thiserror::Error;

/// The category of a validation failure, independent of which value failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Missing,
    NotNumeric,
    TooShort,
    TooLong,
    NotADate,
    InvalidCitizenshipClassification,
    InvalidChecksum,
    InvalidLeadingCharacters,
    DateMismatch,
    InvalidEmail,
    FutureDate,
    ImplausibleAge,
    UnknownLanguage,
    TooFewInterests,
}

/// Errors raised while parsing a national identity number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("The value '{0}' is not numeric.")]
    NotNumeric(String),

    #[error("The value '{0}' is not exactly 13 digits long.")]
    TooShort(String),

    #[error("The value '{0}' is not exactly 13 digits long.")]
    TooLong(String),

    #[error("The value '{0}' does not start with a date in the format 'yymmdd'.")]
    NotADate(String),

    #[error("The value '{0}' does not have a valid citizenship classification.")]
    InvalidCitizenshipClassification(String),

    #[error("The value '{0}' has an invalid checksum digit.")]
    InvalidChecksum(String),
}

impl IdentifierError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentifierError::NotNumeric(_) => ErrorKind::NotNumeric,
            IdentifierError::TooShort(_) => ErrorKind::TooShort,
            IdentifierError::TooLong(_) => ErrorKind::TooLong,
            IdentifierError::NotADate(_) => ErrorKind::NotADate,
            IdentifierError::InvalidCitizenshipClassification(_) => {
                ErrorKind::InvalidCitizenshipClassification
            }
            IdentifierError::InvalidChecksum(_) => ErrorKind::InvalidChecksum,
        }
    }

    /// The input that failed to parse
    pub fn raw(&self) -> &str {
        match self {
            IdentifierError::NotNumeric(raw)
            | IdentifierError::TooShort(raw)
            | IdentifierError::TooLong(raw)
            | IdentifierError::NotADate(raw)
            | IdentifierError::InvalidCitizenshipClassification(raw)
            | IdentifierError::InvalidChecksum(raw) => raw,
        }
    }
}

/// Errors raised while parsing a mobile number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MobileNumberError {
    #[error("The mobile number '{0}' must start with a zero.")]
    InvalidLeadingCharacters(String),

    #[error("The value '{0}' is not exactly 10 digits long.")]
    TooShort(String),

    #[error("The value '{0}' is not exactly 10 digits long.")]
    TooLong(String),

    #[error("The value '{0}' is not numeric.")]
    NotNumeric(String),
}

impl MobileNumberError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MobileNumberError::InvalidLeadingCharacters(_) => ErrorKind::InvalidLeadingCharacters,
            MobileNumberError::TooShort(_) => ErrorKind::TooShort,
            MobileNumberError::TooLong(_) => ErrorKind::TooLong,
            MobileNumberError::NotNumeric(_) => ErrorKind::NotNumeric,
        }
    }

    /// The input that failed to parse
    pub fn raw(&self) -> &str {
        match self {
            MobileNumberError::InvalidLeadingCharacters(raw)
            | MobileNumberError::TooShort(raw)
            | MobileNumberError::TooLong(raw)
            | MobileNumberError::NotNumeric(raw) => raw,
        }
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required value absent or blank
    #[error("The {0} field is required.")]
    Missing(&'static str),

    #[error(transparent)]
    Identifier(#[from] IdentifierError),

    #[error(transparent)]
    MobileNumber(#[from] MobileNumberError),

    /// Birth date disagrees with the date segment of the identity number
    #[error("The birth date '{birth_date}' does not match the identity number '{identifier}'.")]
    DateMismatch { birth_date: String, identifier: String },

    #[error("The value '{0}' is not a valid email address.")]
    InvalidEmail(String),

    #[error("The value '{0}' is not a date in the format 'YYYY-MM-DD'.")]
    InvalidBirthDate(String),

    #[error("The birth date '{0}' is in the future.")]
    FutureBirthDate(String),

    #[error("The birth date '{0}' implies an age above {1} years.")]
    ImplausibleAge(String, u32),

    #[error("The language code '{0}' is not recognised.")]
    UnknownLanguage(String),

    #[error("A person must be interested in at least {required} topic(s), found {found}.")]
    TooFewInterests { required: usize, found: usize },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ValidationError::Missing(_) => ErrorKind::Missing,
            ValidationError::Identifier(e) => e.kind(),
            ValidationError::MobileNumber(e) => e.kind(),
            ValidationError::DateMismatch { .. } => ErrorKind::DateMismatch,
            ValidationError::InvalidEmail(_) => ErrorKind::InvalidEmail,
            ValidationError::InvalidBirthDate(_) => ErrorKind::NotADate,
            ValidationError::FutureBirthDate(_) => ErrorKind::FutureDate,
            ValidationError::ImplausibleAge(..) => ErrorKind::ImplausibleAge,
            ValidationError::UnknownLanguage(_) => ErrorKind::UnknownLanguage,
            ValidationError::TooFewInterests { .. } => ErrorKind::TooFewInterests,
        }
    }
}

/// Errors that can occur when registering a person
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// One or more fields failed validation; nothing was registered
    #[error("Person validation failed: {}", summarize(.0))]
    ValidationFailed(Vec<crate::validation::FieldError>),
}

impl RegistrationError {
    /// The individual field errors
    pub fn field_errors(&self) -> &[crate::validation::FieldError] {
        match self {
            RegistrationError::ValidationFailed(errors) => errors,
        }
    }
}

fn summarize(errors: &[crate::validation::FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
