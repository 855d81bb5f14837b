//! Pre-built Test Fixtures
//!
//! Every valid identity number here has a correct Luhn check digit.

use chrono::NaiveDate;

/// Fixture for national identity numbers
pub struct IdentifierFixtures;

impl IdentifierFixtures {
    /// Male citizen born 1980-01-01
    pub fn male_citizen() -> &'static str {
        "8001015009087"
    }

    /// Female citizen born 1980-01-01
    pub fn female_citizen() -> &'static str {
        "8001010009082"
    }

    /// Male permanent resident born 1980-01-01
    pub fn permanent_resident() -> &'static str {
        "8001015009186"
    }

    /// Female citizen born on the 2000 leap day
    pub fn leap_day() -> &'static str {
        "0002294999087"
    }

    /// Gender digits 4999, the highest female value
    pub fn gender_boundary_female() -> &'static str {
        "8001014999080"
    }

    /// Gender digits 5000, the lowest male value
    pub fn gender_boundary_male() -> &'static str {
        "8001015000086"
    }

    /// Birth date of the 1980-01-01 fixtures
    pub fn birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1980, 1, 1).expect("valid fixture date")
    }

    /// Spaced identity numbers with correct checksums
    pub fn valid() -> Vec<&'static str> {
        vec![
            "971205 2879 088",
            "841113 1148 083",
            "800628 2539 096",
            "730329 1928 084",
            "710921 8954 099",
            "581201 5865 085",
            "591008 1661 089",
            "280629 7495 093",
            "550308 2681 097",
            "470104 6415 096",
            "221024 3900 084",
            "670727 2870 092",
            "910329 4750 099",
        ]
    }

    /// Identity numbers whose first six digits are not a calendar date
    pub fn not_a_date() -> Vec<&'static str> {
        vec![
            "971305 2879 088",
            "841183 1148 083",
            "800638 2539 096",
            "733329 1928 084",
            "710991 8954 099",
            "584201 5865 085",
            "591068 1661 089",
            "286629 7495 093",
            "550348 2681 097",
            "479104 6415 096",
            "221034 3900 084",
            "677727 2870 092",
            "910389 4750 099",
        ]
    }

    /// Identity numbers with a citizenship digit other than 0 or 1
    pub fn invalid_citizenship() -> Vec<&'static str> {
        vec![
            "971205 2879 388",
            "841113 1148 283",
            "800628 2539 596",
            "730329 1928 684",
            "710921 8954 799",
            "581201 5865 885",
            "591008 1661 989",
            "280629 7495 293",
            "550308 2681 497",
            "470104 6415 596",
            "221024 3900 684",
            "670727 2870 792",
            "910329 4750 899",
        ]
    }

    /// Identity numbers with the check digit off by one
    pub fn invalid_checksum() -> Vec<&'static str> {
        vec![
            "971205 2879 087",
            "841113 1148 082",
            "800628 2539 095",
            "730329 1928 083",
            "710921 8954 098",
            "581201 5865 084",
            "591008 1661 088",
            "280629 7495 092",
            "550308 2681 096",
            "470104 6415 095",
            "221024 3900 083",
            "670727 2870 091",
            "910329 4750 098",
        ]
    }

    /// Strings containing non-digit characters
    pub fn non_numeric() -> Vec<&'static str> {
        vec![
            "123a567",
            "1b345678",
            "12345c7890",
            "123d5678901",
            "123456789e12",
            "1234f678901234",
            "1g3456789012345",
            "800101-5009-087",
        ]
    }
}

/// Fixture for mobile numbers
pub struct MobileFixtures;

impl MobileFixtures {
    pub fn local() -> &'static str {
        "0628496691"
    }

    /// Numbers carrying the country code, with or without `+`
    pub fn with_country_code() -> Vec<&'static str> {
        vec![
            "+27785824485",
            "+27883456599",
            "+27797932929",
            "27790175937",
            "27627722658",
        ]
    }

    /// Numbers with spaces and hyphens, including inside the country code
    pub fn with_separators() -> Vec<&'static str> {
        vec![
            "+27 78 582 4485",
            "+27-88-345-6599",
            " +27 79-793-2929",
            " 2 7 7-9 0-1   75 9 3 7 ",
            "2--7--6   2--7722658",
        ]
    }

    /// Numbers that do not start with zero or a country code
    pub fn without_leading_zero() -> Vec<&'static str> {
        vec!["1854609177", "2864656247", "3873396967", "4628496691", "5852397579"]
    }

    /// Ten-character strings with a non-digit
    pub fn non_numeric() -> Vec<&'static str> {
        vec!["085*609177", "0864656e47", "08a3396,67", "0628496z91", "085x397579"]
    }
}
