//! Digit extraction and length clamping.
//!
//! Raw field input may contain anything: letters, separators, pasted
//! whitespace. Nothing is ever rejected here; non-digits are simply dropped.

use crate::card::MAX_CARD_DIGITS;

/// Strips every character that is not an ASCII decimal digit.
///
/// Digits keep their original relative order.
///
/// # Example
///
/// ```
/// use card_field::extract::extract_digits;
///
/// assert_eq!(extract_digits("4111-1111 abc 1111"), "411111111111");
/// assert_eq!(extract_digits(""), "");
/// ```
#[inline]
pub fn extract_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Extracts digits and clamps them in one step.
///
/// # Example
///
/// ```
/// use card_field::extract::extract_clamped;
///
/// assert_eq!(extract_clamped("4111 1111 1111 1111 1112 345"), "4111111111111111111");
/// ```
pub fn extract_clamped(raw: &str) -> String {
    let mut digits = extract_digits(raw);
    digits.truncate(MAX_CARD_DIGITS);
    digits
}

/// Returns true if `s` contains only ASCII digits.
#[inline]
pub fn is_digit_string(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}
