//! Person validation rules
//!
//! Validation of a registration request never stops at the first bad field:
//! every field is checked and each failing field contributes exactly one
//! error, so a caller can report all of them at once. Within a field the
//! checks short-circuit.
//!
//! # Validation Rules
//!
//! - name, surname, national identifier, mobile number, email, birth date
//!   and language are required
//! - the national identifier and mobile number must parse
//! - the email must be well formed
//! - the birth date must be `YYYY-MM-DD`, not in the future, within the
//!   configured maximum age, and agree with the identifier's date segment
//! - the language must be one of the catalogue codes
//! - at least `min_interests` interests must be selected
//!
//! Uniqueness of the national identifier and existence of interest ids are
//! enforced by the record store.

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use core_kernel::RegistryConfig;
use crate::birth_date::BirthDateRule;
use crate::error::{ErrorKind, RegistrationError, ValidationError};
use crate::mobile_number::MobileNumber;
use crate::national_identifier::NationalIdentifier;
use crate::person::{age_between, Language, Person, PersonDetails};
use crate::registration::{is_valid_email, RegisterPersonRequest};

/// A validation error attributed to a request field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub error: ValidationError,
}

impl FieldError {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Result of person validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the request is valid
    pub is_valid: bool,
    /// One entry per failing field
    pub errors: Vec<FieldError>,
    /// Non-fatal issues
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, field: &'static str, error: impl Into<ValidationError>) {
        self.errors.push(FieldError { field, error: error.into() });
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Returns the error recorded for `field`, if any
    pub fn error_for(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field).map(|e| &e.error)
    }

    /// Records the error of a failed result against `field`
    fn capture<T, E>(&mut self, field: &'static str, outcome: Result<T, E>) -> Option<T>
    where
        E: Into<ValidationError>,
    {
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.add_error(field, error);
                None
            }
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Validator for person registration requests
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use core_kernel::RegistryConfig;
/// use domain_person::registration::RegisterPersonRequest;
/// use domain_person::validation::PersonValidator;
///
/// let request = RegisterPersonRequest {
///     national_identifier: Some("8001015009088".to_string()),
///     ..Default::default()
/// };
/// let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
/// let result = PersonValidator::validate(&request, &RegistryConfig::default(), today);
///
/// assert!(!result.is_valid);
/// for error in &result.errors {
///     println!("{}", error);
/// }
/// ```
pub struct PersonValidator;

impl PersonValidator {
    /// Validates every field of the request
    pub fn validate(
        request: &RegisterPersonRequest,
        config: &RegistryConfig,
        today: NaiveDate,
    ) -> ValidationResult {
        Self::evaluate(request, config, today).0
    }

    /// Validates the request and builds the person
    ///
    /// Either all fields are valid and a new `Person` is returned, or every
    /// field error is returned and nothing is built.
    #[instrument(skip_all)]
    pub fn register(
        request: &RegisterPersonRequest,
        config: &RegistryConfig,
        today: NaiveDate,
    ) -> Result<Person, RegistrationError> {
        match Self::evaluate(request, config, today) {
            (result, Some(details)) if result.is_valid => {
                let person = Person::new(details);
                info!(person_id = %person.id, "Person registered");
                Ok(person)
            }
            (result, _) => {
                warn!(failed_fields = result.errors.len(), "Person registration rejected");
                Err(RegistrationError::ValidationFailed(result.errors))
            }
        }
    }

    fn evaluate(
        request: &RegisterPersonRequest,
        config: &RegistryConfig,
        today: NaiveDate,
    ) -> (ValidationResult, Option<PersonDetails>) {
        let mut result = ValidationResult::ok();

        let name = Self::required(&mut result, "name", request.name.as_deref());
        let surname = Self::required(&mut result, "surname", request.surname.as_deref());

        let national_identifier =
            Self::required(&mut result, "national_identifier", request.national_identifier.as_deref())
                .and_then(|raw| {
                    result.capture("national_identifier", NationalIdentifier::parse(raw))
                });

        let mobile_number =
            Self::required(&mut result, "mobile_number", request.mobile_number.as_deref())
                .and_then(|raw| result.capture("mobile_number", MobileNumber::parse(raw)));

        let email = Self::validate_email(&mut result, request.email.as_deref());

        let birth_date = Self::validate_birth_date(
            &mut result,
            request.birth_date.as_deref(),
            national_identifier.as_ref(),
            config,
            today,
        );

        let language = Self::required(&mut result, "language", request.language.as_deref())
            .and_then(|code| {
                let found = Language::from_code(code);
                if found.is_none() {
                    result.add_error("language", ValidationError::UnknownLanguage(code.to_string()));
                }
                found
            });

        Self::validate_interests(&mut result, &request.interests, config);

        let details = match (name, surname, national_identifier, mobile_number, email, birth_date, language) {
            (
                Some(name),
                Some(surname),
                Some(national_identifier),
                Some(mobile_number),
                Some(email),
                Some(birth_date),
                Some(language),
            ) if result.is_valid => Some(PersonDetails {
                name: name.to_string(),
                surname: surname.to_string(),
                national_identifier,
                mobile_number,
                email: email.to_string(),
                birth_date,
                language,
                interests: request.interests.clone(),
            }),
            _ => None,
        };

        (result, details)
    }

    /// Trims the value, recording `Missing` if nothing is left
    fn required<'a>(
        result: &mut ValidationResult,
        field: &'static str,
        value: Option<&'a str>,
    ) -> Option<&'a str> {
        match value.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Some(trimmed),
            _ => {
                result.add_error(field, ValidationError::Missing(field));
                None
            }
        }
    }

    fn validate_email<'a>(result: &mut ValidationResult, raw: Option<&'a str>) -> Option<&'a str> {
        let email = Self::required(result, "email", raw)?;
        if !is_valid_email(email) {
            result.add_error("email", ValidationError::InvalidEmail(email.to_string()));
            return None;
        }
        Some(email)
    }

    fn validate_birth_date(
        result: &mut ValidationResult,
        raw: Option<&str>,
        identifier: Option<&NationalIdentifier>,
        config: &RegistryConfig,
        today: NaiveDate,
    ) -> Option<NaiveDate> {
        const FIELD: &str = "birth_date";

        let raw = Self::required(result, FIELD, raw)?;
        let Some(date) = parse_iso_date(raw) else {
            result.add_error(FIELD, ValidationError::InvalidBirthDate(raw.to_string()));
            return None;
        };

        if date > today {
            result.add_error(FIELD, ValidationError::FutureBirthDate(raw.to_string()));
            return None;
        }

        if age_between(date, today) > config.max_age_years {
            result.add_error(
                FIELD,
                ValidationError::ImplausibleAge(raw.to_string(), config.max_age_years),
            );
            return None;
        }

        // An identifier that failed to parse is reported under its own field.
        if let Some(identifier) = identifier {
            result.capture(FIELD, BirthDateRule::validate(date, identifier))?;
        }

        Some(date)
    }

    fn validate_interests(result: &mut ValidationResult, interests: &[u32], config: &RegistryConfig) {
        if interests.len() < config.min_interests {
            result.add_error(
                "interests",
                ValidationError::TooFewInterests {
                    required: config.min_interests,
                    found: interests.len(),
                },
            );
        }

        let mut seen = HashSet::new();
        if interests.iter().any(|id| !seen.insert(*id)) {
            result.add_warning("Duplicate interests selected");
        }
    }
}

/// Parses exactly `YYYY-MM-DD`
///
/// chrono accepts unpadded fields and a sign on the year, so the parsed date
/// must render back to the input.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    (date.format("%Y-%m-%d").to_string() == raw).then_some(date)
}
