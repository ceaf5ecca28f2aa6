//! Card number formatting example.
//!
//! Run with: `cargo run --example formatting`

use card_field::{detect_card_type, format, mask};

fn main() {
    println!("=== Card Number Formatting ===\n");

    // -------------------------------------------------------------------------
    // Auto-formatting based on card type
    // -------------------------------------------------------------------------
    println!("--- Auto-formatting (type-aware) ---\n");

    let cards = [
        ("4111111111111111", "Visa (4-4-4-4)"),
        ("5500000000000004", "MasterCard (4-4-4-4)"),
        ("378282246310005", "Amex (4-6-5)"),
        ("6011111111111117", "Discover (4-4-4-4)"),
        ("30569309025904", "Diners Club (4-4-4-2)"),
        ("4111111111111111111", "Visa, 19 digits (4-4-4-4-3)"),
    ];

    for (number, description) in cards {
        let formatted = format::format_card_number(number);
        let groups = format::grouping_for(detect_card_type(number), number.len());
        println!("  {}", description);
        println!("    Input:  {}", number);
        println!("    Output: {}", formatted);
        println!("    Groups: {:?}", groups);
        println!();
    }

    // -------------------------------------------------------------------------
    // Custom separators
    // -------------------------------------------------------------------------
    println!("--- Custom Separators ---\n");

    let number = "4111111111111111";
    let separators = [" ", "-", ".", " - "];

    println!("  Card: {}", number);
    for sep in separators {
        let formatted = format::format_with_separator(number, sep);
        println!("    Separator '{}': {}", sep, formatted);
    }
    println!();

    // -------------------------------------------------------------------------
    // Strip formatting
    // -------------------------------------------------------------------------
    println!("--- Stripping Formatting ---\n");

    let formatted_cards = [
        "4111 1111 1111 1111",
        "4111-1111-1111-1111",
        "4111.1111.1111.1111",
        "  4111  1111  1111  1111  ",
        "Card no. 4111/1111/1111/1111",
    ];

    for formatted in formatted_cards {
        let stripped = format::strip_formatting(formatted);
        println!("  '{}' -> '{}'", formatted, stripped);
    }
    println!();

    // -------------------------------------------------------------------------
    // Partial formatting (for input fields)
    // -------------------------------------------------------------------------
    println!("--- Partial Formatting (as-you-type) ---\n");

    let visa = "4111111111111111";
    println!("  Simulating typing a Visa card:");
    for len in 1..=visa.len() {
        let input = &visa[..len];
        println!("    {:<16} -> {}", input, format::format_card_number(input));
    }
    println!();

    // The grouping switches as soon as the prefix identifies Amex
    let amex = "378282246310005";
    println!("  Simulating typing an Amex card:");
    for len in 1..=amex.len() {
        let input = &amex[..len];
        println!("    {:<16} -> {}", input, format::format_card_number(input));
    }
    println!();

    // -------------------------------------------------------------------------
    // Masking
    // -------------------------------------------------------------------------
    println!("--- Masking ---\n");

    for (number, _) in cards {
        let formatted = format::format_card_number(number);
        println!(
            "  {:<23} -> {}  (last four: {})",
            formatted,
            mask::mask_digits(&formatted),
            mask::last_four(&formatted)
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Round-trip formatting
    // -------------------------------------------------------------------------
    println!("--- Round-trip Formatting ---\n");

    let original = "4111111111111111";
    let formatted = format::format_card_number(original);
    let stripped = format::strip_formatting(&formatted);

    println!("  Original:  {}", original);
    println!("  Formatted: {}", formatted);
    println!("  Stripped:  {}", stripped);
    println!(
        "  Round-trip success: {}",
        if original == stripped { "yes" } else { "no" }
    );
}
