//! Comprehensive tests for domain_person

use chrono::NaiveDate;

use domain_person::{
    BirthDateRule, Citizenship, ErrorKind, Gender, MobileNumber, NationalIdentifier,
};
use test_utils::{assert_error_kind, IdentifierFixtures, MobileFixtures};

// ============================================================================
// National Identifier Tests
// ============================================================================

mod national_identifier_tests {
    use super::*;

    fn kind(error: &domain_person::IdentifierError) -> ErrorKind {
        error.kind()
    }

    #[test]
    fn test_parses_reference_identifier() {
        let id = NationalIdentifier::parse("8001015009087").unwrap();

        assert_eq!(id.birth_year(), "80");
        assert_eq!(id.birth_month(), "01");
        assert_eq!(id.birth_day(), "01");
        assert!(id.is_citizen());
        assert!(!id.is_permanent_resident());
        assert!(id.is_male());
        assert!(!id.is_female());
        assert_eq!(id.gender(), Gender::Male);
        assert_eq!(id.citizenship(), Citizenship::Citizen);
    }

    #[test]
    fn test_accepts_all_valid_fixtures() {
        for raw in IdentifierFixtures::valid() {
            let id = NationalIdentifier::parse(raw)
                .unwrap_or_else(|e| panic!("{} should be valid: {}", raw, e));
            assert_eq!(id.to_string(), raw);
        }
    }

    #[test]
    fn test_rejects_non_numeric() {
        for raw in IdentifierFixtures::non_numeric() {
            assert_error_kind(NationalIdentifier::parse(raw), ErrorKind::NotNumeric, kind);
        }
        assert_error_kind(NationalIdentifier::parse(""), ErrorKind::NotNumeric, kind);
        assert_error_kind(NationalIdentifier::parse("   "), ErrorKind::NotNumeric, kind);
    }

    #[test]
    fn test_rejects_too_short() {
        let digits = "123456789012";
        for len in 1..=12 {
            assert_error_kind(
                NationalIdentifier::parse(&digits[..len]),
                ErrorKind::TooShort,
                kind,
            );
        }
    }

    #[test]
    fn test_rejects_too_long() {
        let digits = "12345678901234567890123456";
        for len in 14..=26 {
            assert_error_kind(
                NationalIdentifier::parse(&digits[..len]),
                ErrorKind::TooLong,
                kind,
            );
        }
    }

    #[test]
    fn test_rejects_invalid_dates() {
        for raw in IdentifierFixtures::not_a_date() {
            assert_error_kind(NationalIdentifier::parse(raw), ErrorKind::NotADate, kind);
        }
    }

    #[test]
    fn test_rejects_invalid_citizenship() {
        for raw in IdentifierFixtures::invalid_citizenship() {
            assert_error_kind(
                NationalIdentifier::parse(raw),
                ErrorKind::InvalidCitizenshipClassification,
                kind,
            );
        }
    }

    #[test]
    fn test_rejects_invalid_checksum() {
        for raw in IdentifierFixtures::invalid_checksum() {
            assert_error_kind(NationalIdentifier::parse(raw), ErrorKind::InvalidChecksum, kind);
        }
    }

    #[test]
    fn test_permanent_resident() {
        let id = NationalIdentifier::parse(IdentifierFixtures::permanent_resident()).unwrap();
        assert!(id.is_permanent_resident());
        assert!(!id.is_citizen());
        assert_eq!(id.citizenship(), Citizenship::PermanentResident);
    }

    #[test]
    fn test_gender_boundary() {
        let female = NationalIdentifier::parse(IdentifierFixtures::gender_boundary_female()).unwrap();
        let male = NationalIdentifier::parse(IdentifierFixtures::gender_boundary_male()).unwrap();

        assert_eq!(female.gender_segment(), "4999");
        assert!(female.is_female());
        assert_eq!(male.gender_segment(), "5000");
        assert!(male.is_male());
    }

    #[test]
    fn test_leap_day() {
        let id = NationalIdentifier::parse(IdentifierFixtures::leap_day()).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        assert_eq!(id.birth_date_on(today), NaiveDate::from_ymd_opt(2000, 2, 29));
    }

    #[test]
    fn test_fifties_birth_date_is_in_the_past() {
        let id = NationalIdentifier::parse("581201 5865 085").unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 5, 14).unwrap();
        assert_eq!(id.birth_date_on(today), NaiveDate::from_ymd_opt(1958, 12, 1));
    }

    #[test]
    fn test_spacing_does_not_affect_equality() {
        let compact = NationalIdentifier::parse("8001015009087").unwrap();
        let spaced = NationalIdentifier::parse(" 80 0101 5009 08 7 ").unwrap();
        assert_eq!(compact, spaced);
        assert_eq!(spaced.as_str(), "8001015009087");
    }

    #[test]
    fn test_display_format() {
        let id: NationalIdentifier = "8001015009087".parse().unwrap();
        assert_eq!(id.to_string(), "800101 5009 087");
    }

    #[test]
    fn test_serializes_as_normalized_string() {
        let id = NationalIdentifier::parse("800101 5009 087").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"8001015009087\"");

        let back: NationalIdentifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_deserialize_revalidates() {
        let result = serde_json::from_str::<NationalIdentifier>("\"8001015009088\"");
        let error = result.unwrap_err();
        assert!(error.to_string().contains("invalid checksum digit"));
    }

    #[test]
    fn test_error_message_includes_raw_value() {
        let error = NationalIdentifier::parse("12345").unwrap_err();
        assert_eq!(error.to_string(), "The value '12345' is not exactly 13 digits long.");
    }
}

// ============================================================================
// Mobile Number Tests
// ============================================================================

mod mobile_number_tests {
    use super::*;

    fn kind(error: &domain_person::MobileNumberError) -> ErrorKind {
        error.kind()
    }

    #[test]
    fn test_reference_number_display() {
        let number = MobileNumber::parse("0628496691").unwrap();
        assert_eq!(number.as_str(), "0628496691");
        assert_eq!(number.to_string(), "062 849 6691");
    }

    #[test]
    fn test_prefixes_converge() {
        let expected = "0821234567";
        for raw in ["+27821234567", "27821234567", "0821234567", "082 123 4567"] {
            assert_eq!(MobileNumber::parse(raw).unwrap().as_str(), expected, "input {}", raw);
        }
    }

    #[test]
    fn test_accepts_country_codes() {
        for raw in MobileFixtures::with_country_code() {
            let number = MobileNumber::parse(raw).unwrap();
            assert!(number.as_str().starts_with('0'));
            assert_eq!(number.as_str().len(), 10);
        }
    }

    #[test]
    fn test_accepts_separators() {
        for raw in MobileFixtures::with_separators() {
            assert!(MobileNumber::parse(raw).is_ok(), "{} should be valid", raw);
        }
        assert_eq!(
            MobileNumber::parse(" 2 7 7-9 0-1   75 9 3 7 ").unwrap().as_str(),
            "0790175937"
        );
    }

    #[test]
    fn test_requires_leading_zero() {
        for raw in MobileFixtures::without_leading_zero() {
            assert_error_kind(MobileNumber::parse(raw), ErrorKind::InvalidLeadingCharacters, kind);
        }
    }

    #[test]
    fn test_too_short() {
        for raw in ["0", "08", "087", "0628", "08523", "085460", "0864656", "08733969", "062849669"] {
            assert_error_kind(MobileNumber::parse(raw), ErrorKind::TooShort, kind);
        }
    }

    #[test]
    fn test_too_long() {
        for raw in ["08546091771", "086465624712", "0873396967123", "06284966911234", "085239757912345"] {
            assert_error_kind(MobileNumber::parse(raw), ErrorKind::TooLong, kind);
        }
    }

    #[test]
    fn test_non_numeric() {
        for raw in MobileFixtures::non_numeric() {
            assert_error_kind(MobileNumber::parse(raw), ErrorKind::NotNumeric, kind);
        }
    }

    #[test]
    fn test_error_message() {
        let error = MobileNumber::parse("4628496691").unwrap_err();
        assert_eq!(error.to_string(), "The mobile number '4628496691' must start with a zero.");
        assert_eq!(error.raw(), "4628496691");
    }

    #[test]
    fn test_serialization() {
        let number = MobileNumber::parse("+27 62 849 6691").unwrap();
        let json = serde_json::to_string(&number).unwrap();
        assert_eq!(json, "\"0628496691\"");
        assert!(serde_json::from_str::<MobileNumber>("\"4628496691\"").is_err());
    }
}

// ============================================================================
// Birth Date Rule Tests
// ============================================================================

mod birth_date_rule_tests {
    use super::*;

    #[test]
    fn test_matching_birth_date() {
        let id = NationalIdentifier::parse(IdentifierFixtures::male_citizen()).unwrap();
        let date = NaiveDate::from_ymd_opt(1980, 1, 1).unwrap();
        assert!(BirthDateRule::validate(date, &id).is_ok());
    }

    #[test]
    fn test_mismatched_birth_date() {
        let id = NationalIdentifier::parse(IdentifierFixtures::male_citizen()).unwrap();
        let date = NaiveDate::from_ymd_opt(1981, 1, 1).unwrap();
        let error = BirthDateRule::validate(date, &id).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DateMismatch);
    }

    #[test]
    fn test_permissive_when_identifier_invalid() {
        let date = NaiveDate::from_ymd_opt(1981, 1, 1);
        for raw in IdentifierFixtures::invalid_checksum() {
            assert!(BirthDateRule::validate_raw(date, Some(raw)).is_ok());
        }
    }
}
