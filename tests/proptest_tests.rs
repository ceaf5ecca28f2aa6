//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use card_field::{
    detect_card_type, extract_digits, format_card_number, is_luhn_valid, luhn, process,
    process_with_cursor, reconcile_cursor, CardType, EditSession, Validity, MAX_CARD_DIGITS,
    MIN_VALIDATION_DIGITS,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(digit_string)
}

/// Generates a Luhn-valid digit string by appending the check digit.
fn luhn_valid_string() -> impl Strategy<Value = String> {
    digit_string_range(12..=18).prop_map(|partial| {
        let check = luhn::check_digit(&partial);
        format!("{}{}", partial, check)
    })
}

/// A single user edit.
#[derive(Debug, Clone)]
enum Edit {
    Insert(String),
    Paste(String),
    Backspace,
    Delete,
    Move(usize),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        4 => digit_string_range(1..=1).prop_map(Edit::Insert),
        1 => "[0-9 a-z-]{0,24}".prop_map(Edit::Paste),
        2 => Just(Edit::Backspace),
        1 => Just(Edit::Delete),
        1 => (0usize..30).prop_map(Edit::Move),
    ]
}

// =============================================================================
// EXTRACTION AND FORMATTING PROPERTIES
// =============================================================================

proptest! {
    /// Property: stripping a formatted number gives back its digits.
    #[test]
    fn format_preserves_digits(digits in digit_string_range(0..=MAX_CARD_DIGITS)) {
        prop_assert_eq!(extract_digits(&format_card_number(&digits)), digits);
    }

    /// Property: formatting is idempotent.
    #[test]
    fn format_is_idempotent(digits in digit_string_range(0..=MAX_CARD_DIGITS)) {
        let once = format_card_number(&digits);
        let twice = format_card_number(&extract_digits(&once));
        prop_assert_eq!(once, twice);
    }

    /// Property: separators are single spaces between non-empty groups.
    #[test]
    fn format_separators_are_well_placed(digits in digit_string_range(0..=MAX_CARD_DIGITS)) {
        let formatted = format_card_number(&digits);
        prop_assert!(!formatted.starts_with(' '));
        prop_assert!(!formatted.ends_with(' '));
        prop_assert!(!formatted.contains("  "));
        prop_assert!(formatted.chars().all(|c| c.is_ascii_digit() || c == ' '));
    }

    /// Property: non-Amex numbers are grouped in fours.
    #[test]
    fn non_amex_groups_of_four(digits in digit_string_range(1..=MAX_CARD_DIGITS)) {
        prop_assume!(detect_card_type(&digits) != CardType::Amex);
        let formatted = format_card_number(&digits);
        let groups: Vec<&str> = formatted.split(' ').collect();
        for group in &groups[..groups.len() - 1] {
            prop_assert_eq!(group.len(), 4);
        }
    }

    /// Property: Amex numbers have separators after digits 4 and 10 only.
    #[test]
    fn amex_groups(rest in digit_string_range(0..=13), second in prop_oneof![Just('4'), Just('7')]) {
        let digits = format!("3{}{}", second, rest);
        let formatted = format_card_number(&digits);
        let sizes: Vec<usize> = formatted.split(' ').map(str::len).collect();
        prop_assert!(sizes.len() <= 3);
        prop_assert!(sizes[0] <= 4);
        if sizes.len() > 1 {
            prop_assert_eq!(sizes[0], 4);
        }
        if sizes.len() > 2 {
            prop_assert_eq!(sizes[1], 6);
        }
    }

    /// Property: extraction never panics and keeps only ASCII digits.
    #[test]
    fn extract_keeps_only_digits(input in ".*") {
        let digits = extract_digits(&input);
        prop_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(digits.len(), input.chars().filter(char::is_ascii_digit).count());
    }

    /// Property: output never exceeds the digit limit.
    #[test]
    fn process_clamps(input in "[0-9 -]{0,60}") {
        let state = process(&input);
        prop_assert!(state.digit_count() <= MAX_CARD_DIGITS);
    }
}

// =============================================================================
// LUHN AND VALIDITY PROPERTIES
// =============================================================================

proptest! {
    /// Property: a computed check digit always completes a valid number.
    #[test]
    fn check_digit_makes_valid(number in luhn_valid_string()) {
        prop_assert!(is_luhn_valid(&number));
    }

    /// Property: changing any single digit breaks the checksum.
    #[test]
    fn single_digit_change_detected(number in luhn_valid_string(), pos in 0usize..19, delta in 1u8..10) {
        let pos = pos % number.len();
        let mut bytes = number.into_bytes();
        bytes[pos] = b'0' + (bytes[pos] - b'0' + delta) % 10;
        let changed = String::from_utf8(bytes).unwrap();
        prop_assert!(!is_luhn_valid(&changed));
    }

    /// Property: below the threshold the field is always unknown.
    #[test]
    fn short_input_is_unknown(digits in digit_string_range(0..=MIN_VALIDATION_DIGITS - 1)) {
        prop_assert_eq!(process(&digits).validity(), Validity::Unknown);
    }

    /// Property: at or above the threshold the field matches Luhn.
    #[test]
    fn long_input_matches_luhn(digits in digit_string_range(MIN_VALIDATION_DIGITS..=MAX_CARD_DIGITS)) {
        let expected = if is_luhn_valid(&digits) { Validity::Valid } else { Validity::Invalid };
        prop_assert_eq!(process(&digits).validity(), expected);
    }
}

// =============================================================================
// CARET PROPERTIES
// =============================================================================

proptest! {
    /// Property: the reconciled caret is always within the new text.
    #[test]
    fn cursor_in_bounds(raw in "[0-9 a]{0,30}", offset in 0usize..40) {
        let formatted = format_card_number(&raw);
        let cursor = reconcile_cursor(&raw, offset, &formatted);
        prop_assert!(cursor <= formatted.chars().count());
    }

    /// Property: a caret after the last digit of a digits-only edit ends at the end.
    #[test]
    fn cursor_at_end_stays_at_end(digits in digit_string_range(0..=MAX_CARD_DIGITS)) {
        let state = process_with_cursor(&digits, digits.len());
        prop_assert_eq!(state.cursor(), state.formatted().len());
    }

    /// Property: the caret sits right after the same number of digits.
    #[test]
    fn cursor_keeps_digit_position(digits in digit_string_range(1..=MAX_CARD_DIGITS), at in 0usize..20) {
        let at = at % (digits.len() + 1);
        let state = process_with_cursor(&digits, at);
        let before: usize = state.formatted()
            .chars()
            .take(state.cursor())
            .filter(char::is_ascii_digit)
            .count();
        prop_assert_eq!(before, at);
    }

    /// Property: any edit sequence leaves a consistent session.
    #[test]
    fn sessions_stay_consistent(edits in proptest::collection::vec(edit_strategy(), 0..40)) {
        let mut session = EditSession::new();
        for edit in edits {
            session = match edit {
                Edit::Insert(text) => session.insert(&text),
                Edit::Paste(text) => session.paste(&text),
                Edit::Backspace => session.backspace(),
                Edit::Delete => session.delete_forward(),
                Edit::Move(to) => session.move_cursor(to),
            };
            let digits = session.digits();
            prop_assert!(digits.len() <= MAX_CARD_DIGITS);
            prop_assert_eq!(format_card_number(&digits), session.formatted());
            prop_assert!(session.cursor() <= session.formatted().len());
            prop_assert_eq!(session.card_type(), detect_card_type(&digits));
            prop_assert_eq!(session.validity(), Validity::from_digits(&digits));
        }
    }
}
