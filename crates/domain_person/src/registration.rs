//! Raw input for registering a person
//!
//! Every field arrives as an untrusted string exactly as it was submitted.
//! Nothing here is validated on construction; hand the request to
//! [`crate::validation::PersonValidator`].

use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

/// Data required to add a person to the registry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterPersonRequest {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub national_identifier: Option<String>,
    pub mobile_number: Option<String>,
    pub email: Option<String>,
    /// Birth date as `YYYY-MM-DD`
    pub birth_date: Option<String>,
    /// ISO 639-3 language code
    pub language: Option<String>,
    #[serde(default)]
    pub interests: Vec<u32>,
}

impl RegisterPersonRequest {
    /// Whether the email, if present, is well formed once trimmed
    pub fn has_valid_email(&self) -> bool {
        self.email.as_deref().map_or(true, is_valid_email)
    }
}

/// Surrounding whitespace is ignored, as for every other request field
pub(crate) fn is_valid_email(email: &str) -> bool {
    email.trim().to_string().validate_email()
}
