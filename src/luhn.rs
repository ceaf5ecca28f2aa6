//! Luhn algorithm implementation for card number validation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula used to validate credit card numbers and other identification numbers.
//!
//! Passing the checksum is necessary, not sufficient: it only catches typos
//! such as a single wrong digit or most adjacent transpositions.

/// Validates a digit string using the Luhn algorithm.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// Non-digit characters are skipped without affecting the alternation, so
/// formatted input gives the same answer as its digits.
///
/// # Example
///
/// ```
/// use card_field::luhn::is_luhn_valid;
///
/// assert!(is_luhn_valid("4532015112830366"));
/// assert!(!is_luhn_valid("4532015112830367"));
/// ```
#[inline]
pub fn is_luhn_valid(digits: &str) -> bool {
    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) of a digit string.
///
/// A doubled digit is at most 18 before reduction and 9 after, so a 19 digit
/// number sums to at most 171.
pub fn compute_checksum(digits: &str) -> u32 {
    let mut sum = 0u32;
    let mut double = false;

    for byte in digits.bytes().rev().filter(u8::is_ascii_digit) {
        let mut digit = u32::from(byte - b'0');
        if double {
            digit *= 2;
            if digit > 9 {
                digit -= 9;
            }
        }
        sum += digit;
        double = !double;
    }

    sum
}

/// Computes the check digit that completes `partial` into a Luhn-valid number.
///
/// # Example
///
/// ```
/// use card_field::luhn::{check_digit, is_luhn_valid};
///
/// let partial = "453201511283036";
/// let digit = check_digit(partial);
/// assert_eq!(digit, 6);
/// assert!(is_luhn_valid(&format!("{}{}", partial, digit)));
/// ```
pub fn check_digit(partial: &str) -> u8 {
    // Appending a zero shifts every existing digit one place left, so the
    // doubling lands where it will in the completed number.
    let with_zero = format!("{}0", partial);
    let sum = compute_checksum(&with_zero);
    ((10 - (sum % 10)) % 10) as u8
}
