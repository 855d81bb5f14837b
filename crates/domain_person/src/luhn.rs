//! Luhn (mod 10) check digits
//!
//! Walking the payload from its rightmost digit, every second digit starting
//! with the rightmost one is doubled, and 9 is subtracted from any doubled
//! value above 9. The check digit is whatever brings the sum up to the next
//! multiple of ten.

/// Computes the check digit for an all-digit payload
///
/// Returns `None` if `payload` is empty or contains anything but ASCII digits.
pub fn compute_check_digit(payload: &str) -> Option<u8> {
    if payload.is_empty() {
        return None;
    }

    let mut sum: u32 = 0;
    for (position, byte) in payload.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return None;
        }
        let mut digit = u32::from(byte - b'0');
        if position % 2 == 0 {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
    }

    Some(((10 - sum % 10) % 10) as u8)
}

/// Checks that the last digit of `number` is the check digit of the rest
pub fn is_valid(number: &str) -> bool {
    let Some((at, check)) = number.char_indices().last() else {
        return false;
    };

    match (compute_check_digit(&number[..at]), check.to_digit(10)) {
        (Some(expected), Some(actual)) => u32::from(expected) == actual,
        _ => false,
    }
}
