//! Person entity and the language catalogue
//!
//! A `Person` is only ever built from values that have already passed
//! validation; see [`crate::validation::PersonValidator::register`].

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::PersonId;
use crate::mobile_number::MobileNumber;
use crate::national_identifier::{Gender, NationalIdentifier};

/// Official languages a person may select, keyed by ISO 639-3 code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Afr,
    Eng,
    Nbl,
    Nso,
    Sot,
    Ssw,
    Tsn,
    Tso,
    Ven,
    Xho,
    Zul,
}

impl Language {
    pub const ALL: [Language; 11] = [
        Language::Afr,
        Language::Eng,
        Language::Nbl,
        Language::Nso,
        Language::Sot,
        Language::Ssw,
        Language::Tsn,
        Language::Tso,
        Language::Ven,
        Language::Xho,
        Language::Zul,
    ];

    /// ISO 639-3 code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Afr => "afr",
            Language::Eng => "eng",
            Language::Nbl => "nbl",
            Language::Nso => "nso",
            Language::Sot => "sot",
            Language::Ssw => "ssw",
            Language::Tsn => "tsn",
            Language::Tso => "tso",
            Language::Ven => "ven",
            Language::Xho => "xho",
            Language::Zul => "zul",
        }
    }

    /// English display name
    pub fn name(&self) -> &'static str {
        match self {
            Language::Afr => "Afrikaans",
            Language::Eng => "English",
            Language::Nbl => "Ndebele",
            Language::Nso => "Pedi",
            Language::Sot => "Sotho",
            Language::Ssw => "Swati",
            Language::Tsn => "Tswana",
            Language::Tso => "Tsonga",
            Language::Ven => "Venda",
            Language::Xho => "Xhosa",
            Language::Zul => "Zulu",
        }
    }

    /// Looks up a language by code, ignoring case and surrounding whitespace
    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
    }
}

/// Validated person data, before the registry assigns an identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDetails {
    pub name: String,
    pub surname: String,
    pub national_identifier: NationalIdentifier,
    pub mobile_number: MobileNumber,
    pub email: String,
    pub birth_date: NaiveDate,
    pub language: Language,
    /// Interest ids from the record store's catalogue
    pub interests: Vec<u32>,
}

/// A registered person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub surname: String,
    pub national_identifier: NationalIdentifier,
    pub mobile_number: MobileNumber,
    pub email: String,
    pub birth_date: NaiveDate,
    pub language: Language,
    pub interests: Vec<u32>,
    pub created_at: DateTime<Utc>,
}

impl Person {
    /// Creates a person with a fresh time-ordered identifier
    pub fn new(details: PersonDetails) -> Self {
        Self {
            id: PersonId::new_v7(),
            name: details.name,
            surname: details.surname,
            national_identifier: details.national_identifier,
            mobile_number: details.mobile_number,
            email: details.email,
            birth_date: details.birth_date,
            language: details.language,
            interests: details.interests,
            created_at: Utc::now(),
        }
    }

    /// Returns "Name Surname"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }

    /// Age in whole years on the given date
    pub fn age_on(&self, date: NaiveDate) -> u32 {
        age_between(self.birth_date, date)
    }

    /// Key the record store must keep unique
    pub fn uniqueness_key(&self) -> &str {
        self.national_identifier.as_str()
    }

    pub fn gender(&self) -> Gender {
        self.national_identifier.gender()
    }
}

/// Completed years from `birth_date` to `on`; zero if `on` is earlier
pub(crate) fn age_between(birth_date: NaiveDate, on: NaiveDate) -> u32 {
    let mut age = on.year() - birth_date.year();
    if (on.month(), on.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age.max(0) as u32
}
