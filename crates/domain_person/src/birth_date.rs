//! Agreement between a stated birth date and an identity number
//!
//! The comparison is textual: the birth date is rendered as `yymmdd` and
//! compared with the identifier's date segment. Dates a century apart render
//! the same and are therefore accepted.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::national_identifier::NationalIdentifier;

/// Rule checking a birth date against an identity number
pub struct BirthDateRule;

impl BirthDateRule {
    /// Fails with `DateMismatch` if the dates disagree
    pub fn validate(
        birth_date: NaiveDate,
        identifier: &NationalIdentifier,
    ) -> Result<(), ValidationError> {
        let rendered = birth_date.format("%y%m%d").to_string();
        if rendered == identifier.date_segment() {
            return Ok(());
        }

        Err(ValidationError::DateMismatch {
            birth_date: birth_date.format("%Y-%m-%d").to_string(),
            identifier: identifier.as_str().to_string(),
        })
    }

    /// Permissive form used during aggregate validation
    ///
    /// A missing birth date, a missing identifier or one that does not parse
    /// is not this rule's failure to report, so it passes. Only a positive
    /// mismatch fails.
    pub fn validate_raw(
        birth_date: Option<NaiveDate>,
        identifier: Option<&str>,
    ) -> Result<(), ValidationError> {
        let (Some(birth_date), Some(raw)) = (birth_date, identifier) else {
            return Ok(());
        };

        match NationalIdentifier::parse(raw) {
            Ok(identifier) => Self::validate(birth_date, &identifier),
            Err(_) => Ok(()),
        }
    }
}
