//! Person Domain
//!
//! This crate holds the validation core of the registry of persons: the
//! self-validating value objects a person record is built from, and the
//! rules that check a registration request as a whole.
//!
//! - [`NationalIdentifier`]: a 13-digit South African identity number with
//!   its date, gender, citizenship, race and checksum segments
//! - [`MobileNumber`]: a South African mobile number normalized to its
//!   10-digit local form
//! - [`BirthDateRule`]: agreement between a stated birth date and the
//!   identity number
//! - [`PersonValidator`]: field-by-field validation of a
//!   [`RegisterPersonRequest`], collecting every failing field
//!
//! Persistence, uniqueness of the identity number, and notification are the
//! responsibility of the surrounding application.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use core_kernel::RegistryConfig;
//! use domain_person::{PersonValidator, RegisterPersonRequest};
//!
//! let request = RegisterPersonRequest {
//!     name: Some("Naledi".to_string()),
//!     surname: Some("Mokoena".to_string()),
//!     national_identifier: Some("8001010009082".to_string()),
//!     mobile_number: Some("27 62 849 6691".to_string()),
//!     email: Some("naledi@example.co.za".to_string()),
//!     birth_date: Some("1980-01-01".to_string()),
//!     language: Some("sot".to_string()),
//!     interests: vec![2],
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
//! let person = PersonValidator::register(&request, &RegistryConfig::default(), today).unwrap();
//!
//! assert!(person.national_identifier.is_female());
//! assert_eq!(person.mobile_number.to_string(), "062 849 6691");
//! ```

pub mod luhn;
pub mod national_identifier;
pub mod mobile_number;
pub mod birth_date;
pub mod person;
pub mod registration;
pub mod validation;
pub mod error;

pub use national_identifier::{Citizenship, Gender, NationalIdentifier};
pub use mobile_number::MobileNumber;
pub use birth_date::BirthDateRule;
pub use person::{Language, Person, PersonDetails};
pub use registration::RegisterPersonRequest;
pub use validation::{FieldError, PersonValidator, ValidationResult};
pub use error::{ErrorKind, IdentifierError, MobileNumberError, RegistrationError, ValidationError};
