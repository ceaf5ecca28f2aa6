//! Fuzz target for card formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use card_field::{extract, format, reconcile_cursor, MAX_CARD_DIGITS};

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = format::format_with_separator(data, "-");
    let _ = format::format_with_separator(data, "");
    let _ = format::split_into_groups(data);

    // Verify roundtrip property
    let formatted = format::format_card_number(data);
    let stripped = format::strip_formatting(&formatted);
    let original_digits = extract::extract_clamped(data);
    assert_eq!(stripped, original_digits, "Format roundtrip should preserve digits");
    assert!(stripped.len() <= MAX_CARD_DIGITS);
    assert_eq!(format::format_card_number(&stripped), formatted, "Format should be idempotent");

    // Caret always lands inside the result
    let len = data.chars().count();
    for offset in [0, len / 2, len, len + 3] {
        let cursor = reconcile_cursor(data, offset, &formatted);
        assert!(cursor <= formatted.len(), "Cursor past end of field");
    }
});
