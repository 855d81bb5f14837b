//! Test Data Builders
//!
//! Provides a builder for registration requests with realistic defaults.
//! Names and emails come from `fake`; the identity number, mobile number
//! and birth date default to a consistent, valid combination.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use domain_person::RegisterPersonRequest;

use crate::fixtures::{IdentifierFixtures, MobileFixtures};

/// Builder for constructing registration requests
pub struct RegisterPersonRequestBuilder {
    request: RegisterPersonRequest,
}

impl Default for RegisterPersonRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterPersonRequestBuilder {
    /// Creates a builder whose request passes validation
    pub fn new() -> Self {
        Self {
            request: RegisterPersonRequest {
                name: Some(FirstName().fake()),
                surname: Some(LastName().fake()),
                national_identifier: Some(IdentifierFixtures::male_citizen().to_string()),
                mobile_number: Some(MobileFixtures::local().to_string()),
                email: Some(SafeEmail().fake()),
                birth_date: Some("1980-01-01".to_string()),
                language: Some("eng".to_string()),
                interests: vec![1, 2, 3],
            },
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.request.name = Some(name.into());
        self
    }

    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.request.surname = Some(surname.into());
        self
    }

    pub fn with_national_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.request.national_identifier = Some(identifier.into());
        self
    }

    pub fn with_mobile_number(mut self, number: impl Into<String>) -> Self {
        self.request.mobile_number = Some(number.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.request.email = Some(email.into());
        self
    }

    pub fn with_birth_date(mut self, date: impl Into<String>) -> Self {
        self.request.birth_date = Some(date.into());
        self
    }

    pub fn with_language(mut self, code: impl Into<String>) -> Self {
        self.request.language = Some(code.into());
        self
    }

    pub fn with_interests(mut self, interests: Vec<u32>) -> Self {
        self.request.interests = interests;
        self
    }

    /// Clears the national identifier
    pub fn without_national_identifier(mut self) -> Self {
        self.request.national_identifier = None;
        self
    }

    /// Clears the birth date
    pub fn without_birth_date(mut self) -> Self {
        self.request.birth_date = None;
        self
    }

    pub fn build(self) -> RegisterPersonRequest {
        self.request
    }
}
