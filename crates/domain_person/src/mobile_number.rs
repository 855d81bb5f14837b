//! South African mobile numbers
//!
//! Input may use spaces or hyphens as separators and may carry the country
//! code as `+27` or `27`. All of these normalize to the 10-digit local form
//! starting with `0`:
//!
//! ```rust
//! use domain_person::mobile_number::MobileNumber;
//!
//! let local = MobileNumber::parse("082 123 4567").unwrap();
//! let international = MobileNumber::parse("+27-82-123-4567").unwrap();
//! assert_eq!(local, international);
//! assert_eq!(local.as_str(), "0821234567");
//! assert_eq!(local.to_string(), "082 123 4567");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::MobileNumberError;

/// Number of digits in a local mobile number
pub const MOBILE_NUMBER_LENGTH: usize = 10;

const COUNTRY_CODE: &str = "27";

/// A validated mobile number in local `0XXXXXXXXX` form
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MobileNumber {
    normalized: String,
}

impl MobileNumber {
    /// Normalizes and validates a raw mobile number
    ///
    /// The leading zero is checked before the length, and the length before
    /// the digits, so `"12345"` is reported as having invalid leading
    /// characters rather than being too short.
    pub fn parse(raw: &str) -> Result<Self, MobileNumberError> {
        let candidate = normalize(raw);

        Self::check(&candidate, raw).inspect_err(|err| {
            debug!(kind = ?err.kind(), "Mobile number rejected");
        })?;

        Ok(Self { normalized: candidate })
    }

    fn check(candidate: &str, raw: &str) -> Result<(), MobileNumberError> {
        if !candidate.starts_with('0') {
            return Err(MobileNumberError::InvalidLeadingCharacters(raw.to_string()));
        }

        let length = candidate.chars().count();
        if length < MOBILE_NUMBER_LENGTH {
            return Err(MobileNumberError::TooShort(raw.to_string()));
        }
        if length > MOBILE_NUMBER_LENGTH {
            return Err(MobileNumberError::TooLong(raw.to_string()));
        }

        if !candidate.bytes().all(|b| b.is_ascii_digit()) {
            return Err(MobileNumberError::NotNumeric(raw.to_string()));
        }

        Ok(())
    }

    /// The 10 local digits without separators
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn into_inner(self) -> String {
        self.normalized
    }

    /// E.164 rendering, e.g. `+27821234567`
    pub fn to_international(&self) -> String {
        format!("+{}{}", COUNTRY_CODE, &self.normalized[1..])
    }
}

/// Strips separators, then rewrites a leading country code to `0`
fn normalize(raw: &str) -> String {
    let mut buffer: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();

    if buffer.starts_with("+27") {
        buffer.replace_range(..3, "0");
    }
    if buffer.starts_with(COUNTRY_CODE) {
        buffer.replace_range(..COUNTRY_CODE.len(), "0");
    }

    buffer
}

impl fmt::Display for MobileNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = &self.normalized;
        write!(f, "{} {} {}", &n[0..3], &n[3..6], &n[6..10])
    }
}

impl FromStr for MobileNumber {
    type Err = MobileNumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for MobileNumber {
    type Error = MobileNumberError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<MobileNumber> for String {
    fn from(number: MobileNumber) -> String {
        number.normalized
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("+27 82 123 4567"), "0821234567");
        assert_eq!(normalize("27-82-123-4567"), "0821234567");
        assert_eq!(normalize("082 123 4567"), "0821234567");
        assert_eq!(normalize("+2 7 82 123 4567"), "0821234567");
    }

    #[test]
    fn test_country_code_rewritten_once() {
        // "+27" becomes "0", which no longer starts with "27".
        assert_eq!(normalize("+2727123456"), "027123456");
        assert_eq!(normalize("2727123456"), "027123456");
    }

    #[test]
    fn test_country_code_only_rewritten_at_start() {
        assert_eq!(normalize("0821+274567"), "0821+274567");
        let err = MobileNumber::parse("0821+274567").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooLong);
    }

    #[test]
    fn test_leading_zero_checked_first() {
        let err = MobileNumber::parse("12345").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLeadingCharacters);

        let err = MobileNumber::parse("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLeadingCharacters);
    }

    #[test]
    fn test_length_checked_before_digits() {
        let err = MobileNumber::parse("08a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TooShort);
    }

    #[test]
    fn test_doubled_plus_is_not_a_country_code() {
        let err = MobileNumber::parse("++27821234567").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLeadingCharacters);
    }

    #[test]
    fn test_to_international() {
        let number = MobileNumber::parse("0628496691").unwrap();
        assert_eq!(number.to_international(), "+27628496691");
    }
}
