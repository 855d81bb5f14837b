//! South African national identity numbers
//!
//! An identity number is 13 digits laid out as `YYMMDD SSSS CAZ`:
//!
//! | Segment     | Offset | Length | Meaning                                  |
//! |-------------|--------|--------|------------------------------------------|
//! | date        | 0      | 6      | birth date, `yymmdd`                     |
//! | gender      | 6      | 4      | below 5000 is female, otherwise male     |
//! | citizenship | 10     | 1      | `0` citizen, `1` permanent resident      |
//! | race        | 11     | 1      | historical digit, no longer meaningful   |
//! | checksum    | 12     | 1      | Luhn check digit over the first 12       |
//!
//! # Examples
//!
//! ```rust
//! use domain_person::national_identifier::NationalIdentifier;
//!
//! let id = NationalIdentifier::parse("800101 5009 087").unwrap();
//! assert_eq!(id.as_str(), "8001015009087");
//! assert_eq!(id.to_string(), "800101 5009 087");
//! assert!(id.is_male());
//! assert!(id.is_citizen());
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IdentifierError;
use crate::luhn;

/// Number of digits in a national identity number
pub const IDENTIFIER_LENGTH: usize = 13;

const DATE: (usize, usize) = (0, 6);
const GENDER: (usize, usize) = (6, 4);
const CITIZENSHIP: (usize, usize) = (10, 1);
const RACE: (usize, usize) = (11, 1);
const CHECKSUM: (usize, usize) = (12, 1);

/// Gender values of 5000 and above denote males
const MALE_THRESHOLD: u16 = 5000;

/// Gender encoded in an identity number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

/// Citizenship classification encoded in an identity number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Citizenship {
    /// South African citizen (`0`)
    Citizen,
    /// Foreigner granted permanent residency (`1`)
    PermanentResident,
}

/// A validated 13-digit national identity number
///
/// Equality, ordering and hashing use the normalized digits only, so two
/// identifiers parsed from differently spaced input compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NationalIdentifier {
    normalized: String,
}

impl NationalIdentifier {
    /// Parses and validates a raw identity number
    ///
    /// Spaces anywhere in `raw` are ignored. Checks run in a fixed order and
    /// the first failing one determines the error:
    ///
    /// 1. only digits remain
    /// 2. exactly 13 digits
    /// 3. the first six digits form a calendar date
    /// 4. the citizenship digit is `0` or `1`
    /// 5. the last digit is the Luhn check digit of the first twelve
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let candidate: String = raw.chars().filter(|c| *c != ' ').collect();

        Self::check(&candidate, raw).inspect_err(|err| {
            debug!(kind = ?err.kind(), "National identifier rejected");
        })?;

        Ok(Self { normalized: candidate })
    }

    fn check(candidate: &str, raw: &str) -> Result<(), IdentifierError> {
        if candidate.is_empty() || !candidate.bytes().all(|b| b.is_ascii_digit()) {
            return Err(IdentifierError::NotNumeric(raw.to_string()));
        }

        if candidate.len() < IDENTIFIER_LENGTH {
            return Err(IdentifierError::TooShort(raw.to_string()));
        }
        if candidate.len() > IDENTIFIER_LENGTH {
            return Err(IdentifierError::TooLong(raw.to_string()));
        }

        if parse_date_segment(segment(candidate, DATE)).is_none() {
            return Err(IdentifierError::NotADate(raw.to_string()));
        }

        if !matches!(segment(candidate, CITIZENSHIP), "0" | "1") {
            return Err(IdentifierError::InvalidCitizenshipClassification(raw.to_string()));
        }

        let payload = &candidate[..CHECKSUM.0];
        let expected = luhn::compute_check_digit(payload);
        let actual = segment(candidate, CHECKSUM).parse::<u8>().ok();
        if expected.is_none() || expected != actual {
            return Err(IdentifierError::InvalidChecksum(raw.to_string()));
        }

        Ok(())
    }

    /// The 13 digits without any spacing; the storage and uniqueness key
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Consumes the identifier, returning the normalized digits
    pub fn into_inner(self) -> String {
        self.normalized
    }

    /// Birth date segment, `yymmdd`
    pub fn date_segment(&self) -> &str {
        segment(&self.normalized, DATE)
    }

    /// Gender segment, four digits; below `5000` is female
    pub fn gender_segment(&self) -> &str {
        segment(&self.normalized, GENDER)
    }

    /// Citizenship segment, `0` or `1`
    pub fn citizenship_segment(&self) -> &str {
        segment(&self.normalized, CITIZENSHIP)
    }

    /// Race segment, historical and carried as-is
    pub fn race_segment(&self) -> &str {
        segment(&self.normalized, RACE)
    }

    /// Luhn check digit
    pub fn checksum_segment(&self) -> &str {
        segment(&self.normalized, CHECKSUM)
    }

    /// Two-digit birth year; `"84"` may be 1984 or 1884
    pub fn birth_year(&self) -> &str {
        &self.date_segment()[0..2]
    }

    /// Two-digit birth month, January is `"01"`
    pub fn birth_month(&self) -> &str {
        &self.date_segment()[2..4]
    }

    /// Two-digit day of the month
    pub fn birth_day(&self) -> &str {
        &self.date_segment()[4..6]
    }

    /// Birth date as known on `reference`
    ///
    /// The segment carries no century, so the latest century that puts the
    /// date on or before `reference` is taken: `581201` read in 2024 is
    /// 1958-12-01. Returns `None` only when no such century yields a calendar
    /// date, e.g. `000229` read before the year 2000.
    pub fn birth_date_on(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let (yy, month, day) = date_parts(self.date_segment())?;
        let century = reference.year() - reference.year().rem_euclid(100);

        [century, century - 100]
            .into_iter()
            .filter_map(|c| NaiveDate::from_ymd_opt(c + yy as i32, month, day))
            .find(|date| *date <= reference)
    }

    pub fn gender(&self) -> Gender {
        let value: u16 = self.gender_segment().parse().unwrap_or_default();
        if value < MALE_THRESHOLD {
            Gender::Female
        } else {
            Gender::Male
        }
    }

    pub fn is_female(&self) -> bool {
        self.gender() == Gender::Female
    }

    pub fn is_male(&self) -> bool {
        !self.is_female()
    }

    pub fn citizenship(&self) -> Citizenship {
        if self.citizenship_segment() == "0" {
            Citizenship::Citizen
        } else {
            Citizenship::PermanentResident
        }
    }

    pub fn is_citizen(&self) -> bool {
        self.citizenship_segment() == "0"
    }

    pub fn is_permanent_resident(&self) -> bool {
        self.citizenship_segment() == "1"
    }
}

/// Century used when checking that the date segment is a calendar date
///
/// Only leap days depend on it, and only through `00`, which resolves to the
/// leap year 2000.
fn resolve_two_digit_year(yy: u32) -> i32 {
    let yy = (yy % 100) as i32;
    if yy <= 68 {
        2000 + yy
    } else {
        1900 + yy
    }
}

fn segment(digits: &str, (offset, length): (usize, usize)) -> &str {
    &digits[offset..offset + length]
}

fn date_parts(date: &str) -> Option<(u32, u32, u32)> {
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let yy = date[0..2].parse().ok()?;
    let month = date[2..4].parse().ok()?;
    let day = date[4..6].parse().ok()?;
    Some((yy, month, day))
}

fn parse_date_segment(date: &str) -> Option<NaiveDate> {
    let (yy, month, day) = date_parts(date)?;
    NaiveDate::from_ymd_opt(resolve_two_digit_year(yy), month, day)
}

impl fmt::Display for NationalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}{}",
            self.date_segment(),
            self.gender_segment(),
            self.citizenship_segment(),
            self.race_segment(),
            self.checksum_segment()
        )
    }
}

impl FromStr for NationalIdentifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NationalIdentifier {
    type Error = IdentifierError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NationalIdentifier> for String {
    fn from(id: NationalIdentifier) -> String {
        id.normalized
    }
}

impl AsRef<str> for NationalIdentifier {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}
