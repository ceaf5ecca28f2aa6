//! Card number formatting utilities.
//!
//! Digits are grouped for display according to the detected card type.
//!
//! # Format Conventions
//!
//! - **American Express**: `XXXX XXXXXX XXXXX` (4-6-5)
//! - **Everything else**, including unknown prefixes: groups of 4
//!
//! Because the grouping depends on detection, it can change while the user
//! types: `3` is grouped 4-4-4 until a `4` turns it into American Express,
//! at which point the digits already entered are regrouped 4-6-5.
//!
//! # Example
//!
//! ```
//! use card_field::format::{format_card_number, format_with_separator};
//!
//! assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
//! assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
//! assert_eq!(format_with_separator("4111111111111111", "-"), "4111-1111-1111-1111");
//! ```

use crate::card::CardType;
use crate::detect::detect_card_type;
use crate::extract::extract_clamped;

/// Separator inserted between digit groups.
pub const SEPARATOR: char = ' ';

/// Leading group sizes for American Express numbers.
const AMEX_GROUPS: [usize; 2] = [4, 6];

/// Formats a card number with space separators.
///
/// Non-digits are stripped and the input is clamped to
/// [`MAX_CARD_DIGITS`](crate::MAX_CARD_DIGITS) first.
///
/// # Example
///
/// ```
/// use card_field::format::format_card_number;
///
/// assert_eq!(format_card_number("3412345678"), "3412 345678");
/// assert_eq!(format_card_number("4412345678"), "4412 3456 78");
/// assert_eq!(format_card_number("4111"), "4111");
/// ```
pub fn format_card_number(digits: &str) -> String {
    format_with_separator(digits, " ")
}

/// Formats a card number with a custom separator.
///
/// # Example
///
/// ```
/// use card_field::format::format_with_separator;
///
/// assert_eq!(format_with_separator("4111111111111111", " - "), "4111 - 1111 - 1111 - 1111");
/// ```
pub fn format_with_separator(input: &str, separator: &str) -> String {
    let digits = extract_clamped(input);
    let groups = grouping_for(detect_card_type(&digits), digits.len());

    let mut result = String::with_capacity(digits.len() + groups.len() * separator.len());
    let mut pos = 0;

    for (i, size) in groups.into_iter().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(&digits[pos..pos + size]);
        pos += size;
    }

    result
}

/// Returns the group sizes used to display `length` digits of a card type.
///
/// Sizes always sum to `length`; the last group may be short and no group
/// is empty.
///
/// # Example
///
/// ```
/// use card_field::format::grouping_for;
/// use card_field::CardType;
///
/// assert_eq!(grouping_for(CardType::Visa, 10), vec![4, 4, 2]);
/// assert_eq!(grouping_for(CardType::Amex, 15), vec![4, 6, 5]);
/// assert_eq!(grouping_for(CardType::Amex, 10), vec![4, 6]);
/// ```
pub fn grouping_for(card_type: CardType, length: usize) -> Vec<usize> {
    let mut groups = Vec::new();
    let mut remaining = length;

    if card_type == CardType::Amex {
        // Separators after digits 4 and 10 only; the tail stays one group
        for size in AMEX_GROUPS {
            if remaining == 0 {
                break;
            }
            let take = size.min(remaining);
            groups.push(take);
            remaining -= take;
        }
        if remaining > 0 {
            groups.push(remaining);
        }
        return groups;
    }

    while remaining > 0 {
        let take = remaining.min(4);
        groups.push(take);
        remaining -= take;
    }
    groups
}

/// Strips all formatting from a card number, leaving only digits.
///
/// # Example
///
/// ```
/// use card_field::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// ```
#[inline]
pub fn strip_formatting(input: &str) -> String {
    crate::extract::extract_digits(input)
}

/// Splits the card number into its display groups.
///
/// # Example
///
/// ```
/// use card_field::format::split_into_groups;
///
/// assert_eq!(split_into_groups("378282246310005"), vec!["3782", "822463", "10005"]);
/// ```
pub fn split_into_groups(input: &str) -> Vec<String> {
    let digits = extract_clamped(input);
    let sizes = grouping_for(detect_card_type(&digits), digits.len());

    let mut groups = Vec::with_capacity(sizes.len());
    let mut pos = 0;
    for size in sizes {
        groups.push(digits[pos..pos + size].to_string());
        pos += size;
    }
    groups
}

/// Counts separator characters among the first `end` chars of `s`.
pub(crate) fn separators_before(s: &str, end: usize) -> usize {
    s.chars().take(end).filter(|&c| c == SEPARATOR).count()
}
