//! Property-Based Test Generators
//!
//! Provides proptest strategies for identity numbers and mobile numbers,
//! both valid and deliberately broken.

use chrono::{Duration, NaiveDate};
use domain_person::luhn;
use proptest::prelude::*;

/// Number of days from 1969-01-01 through 2068-12-31
const PIVOT_WINDOW_DAYS: i64 = 36_524;

/// Strategy for dates inside the two-digit-year window (1969..=2068)
pub fn birth_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..=PIVOT_WINDOW_DAYS).prop_map(|offset| {
        NaiveDate::from_ymd_opt(1969, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Strategy for the four gender digits
pub fn gender_digits_strategy() -> impl Strategy<Value = u16> {
    0u16..10_000u16
}

/// Strategy for valid 13-digit identity numbers
pub fn valid_identifier_strategy() -> impl Strategy<Value = String> {
    (birth_date_strategy(), gender_digits_strategy(), 0u8..=1u8, 0u8..=9u8).prop_map(
        |(date, gender, citizenship, race)| {
            build_identifier(date, gender, citizenship, race)
        },
    )
}

/// Strategy for a valid identity number paired with its birth date
pub fn identifier_with_birth_date_strategy() -> impl Strategy<Value = (String, NaiveDate)> {
    (birth_date_strategy(), gender_digits_strategy(), 0u8..=1u8, 0u8..=9u8).prop_map(
        |(date, gender, citizenship, race)| {
            (build_identifier(date, gender, citizenship, race), date)
        },
    )
}

/// Strategy for identity numbers whose check digit is wrong
pub fn wrong_checksum_identifier_strategy() -> impl Strategy<Value = String> {
    (valid_identifier_strategy(), 1u8..=9u8).prop_map(|(valid, shift)| {
        let (payload, check) = valid.split_at(12);
        let check = check.parse::<u8>().unwrap();
        format!("{}{}", payload, (check + shift) % 10)
    })
}

/// Strategy for all-digit strings that are not 13 long
pub fn wrong_length_digits_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,12}", "[0-9]{14,30}"]
}

/// Strategy for local mobile numbers
pub fn local_mobile_strategy() -> impl Strategy<Value = String> {
    "0[0-9]{9}"
}

/// Strategy for a local mobile number and an equivalent written form
///
/// The written form may carry `+27` or `27` in place of the leading zero,
/// and spaces or hyphens between digits.
pub fn mobile_presentation_strategy() -> impl Strategy<Value = (String, String)> {
    (
        local_mobile_strategy(),
        prop_oneof![Just("0"), Just("+27"), Just("27")],
        proptest::collection::vec(prop_oneof![Just(""), Just(" "), Just("-")], 9),
    )
        .prop_map(|(local, prefix, separators)| {
            let mut written = String::from(prefix);
            for (digit, separator) in local[1..].chars().zip(separators) {
                written.push_str(separator);
                written.push(digit);
            }
            (local, written)
        })
}

fn build_identifier(date: NaiveDate, gender: u16, citizenship: u8, race: u8) -> String {
    let payload = format!("{}{:04}{}{}", date.format("%y%m%d"), gender, citizenship, race);
    let check = luhn::compute_check_digit(&payload).unwrap();
    format!("{}{}", payload, check)
}
