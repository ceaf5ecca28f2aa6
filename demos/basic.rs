//! Basic card field pipeline example.
//!
//! Run with: `cargo run --example basic`

use card_field::{process, process_with_cursor, CardType, Validity};

fn main() {
    println!("=== Basic Card Field Pipeline ===\n");

    // Example 1: Process one field value
    let raw = "4532-0151-1283-0366";
    println!("Processing: {}", raw);

    let state = process(raw);
    println!("  Formatted: {}", state.formatted());
    println!("  Card Type: {}", state.card_type());
    println!("  Validity: {}", state.validity());
    println!("  Digits: {}", state.digit_count());
    println!("  Masked: {}", state.masked());
    println!();

    // Example 2: Quick checks on several numbers
    let test_cards = [
        ("4111111111111111", "Visa"),
        ("5500000000000004", "MasterCard"),
        ("378282246310005", "Amex"),
        ("6011111111111117", "Discover"),
        ("4111111111111112", "Visa (bad checksum)"),
        ("411111", "Visa (too short to check)"),
    ];

    println!("Quick pipeline checks:");
    for (number, description) in test_cards {
        let state = process(number);
        let status = match state.validity() {
            Validity::Valid => "VALID",
            Validity::Invalid => "INVALID",
            Validity::Unknown => "UNKNOWN",
        };
        println!("  {:<23} - {}: {}", state.formatted(), description, status);
    }
    println!();

    // Example 3: Caret handling
    println!("Caret reconciliation:");

    let edits = [
        ("41111", 5, "fifth digit typed at the end"),
        ("4111 111", 4, "caret at a group boundary"),
        ("3412 3456 78", 12, "regrouped as Amex"),
        ("411111111", 9, "nine digits pasted"),
    ];

    for (raw, cursor, description) in edits {
        let state = process_with_cursor(raw, cursor);
        let mut shown: String = state.formatted().chars().take(state.cursor()).collect();
        shown.push('|');
        shown.extend(state.formatted().chars().skip(state.cursor()));
        println!("  {:<14} @{:<2} -> {:<14} ({})", raw, cursor, shown, description);
    }
    println!();

    // Example 4: All supported card types
    println!("Supported card types:");
    for card_type in CardType::ALL {
        println!("  {}", card_type.name());
    }
}
