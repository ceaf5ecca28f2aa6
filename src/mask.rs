//! Masking for card numbers that end up in logs or debug output.
//!
//! Only the last four digits are ever shown. Numbers with four digits or
//! fewer are masked completely, since a partial entry of that size would
//! otherwise be shown in full.

/// Mask character substituted for hidden digits.
pub const MASK_CHAR: char = '*';

/// Masks all digits except the last four, keeping every other character.
///
/// Separators survive, so a formatted field stays readable.
///
/// # Example
///
/// ```
/// use card_field::mask::mask_digits;
///
/// assert_eq!(mask_digits("4111 1111 1111 1111"), "**** **** **** 1111");
/// assert_eq!(mask_digits("3782 822463 10005"), "**** ****** *0005");
/// assert_eq!(mask_digits("4111"), "****");
/// ```
pub fn mask_digits(input: &str) -> String {
    let total = input.chars().filter(char::is_ascii_digit).count();
    let visible_from = if total > 4 { total - 4 } else { total };

    let mut seen = 0;
    input
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen > visible_from {
                c
            } else {
                MASK_CHAR
            }
        })
        .collect()
}

/// Returns the last four digits, or an empty string if there are fewer.
#[inline]
pub fn last_four(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= 4 {
        digits[digits.len() - 4..].iter().collect()
    } else {
        String::new()
    }
}
