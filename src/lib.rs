//! # card_field
//!
//! Input pipeline for payment card number fields.
//!
//! As the user types or pastes, the raw text is stripped down to digits,
//! grouped for display according to the detected card network, checked with
//! the Luhn algorithm, and the caret is moved so it does not jump when
//! separators appear or disappear.
//!
//! ## Features
//!
//! - Digit extraction that never rejects input
//! - Ordered prefix table for six card networks
//! - Network-aware grouping (4-4-4-4, or 4-6-5 for American Express)
//! - Luhn validation with an `Unknown` state for short input
//! - Pure caret reconciliation
//! - Immutable edit sessions with insert, paste, backspace and delete
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_field::{extract_digits, detect_card_type, format_card_number, is_luhn_valid, CardType};
//!
//! let digits = extract_digits("4532-0151-1283-0366");
//! assert_eq!(detect_card_type(&digits), CardType::Visa);
//! assert_eq!(format_card_number(&digits), "4532 0151 1283 0366");
//! assert!(is_luhn_valid(&digits));
//! ```
//!
//! ## Interactive Editing
//!
//! ```rust
//! use card_field::{EditSession, Validity};
//!
//! let session = EditSession::new().insert("41111");
//! assert_eq!(session.formatted(), "4111 1");
//! assert_eq!(session.cursor(), 6);
//! assert_eq!(session.validity(), Validity::Unknown);
//! ```
//!
//! ## Caret Reconciliation
//!
//! ```rust
//! use card_field::reconcile_cursor;
//!
//! // The user typed a fifth digit; a separator now precedes the caret.
//! assert_eq!(reconcile_cursor("41111", 5, "4111 1"), 6);
//! ```
//!
//! ## Supported Card Types
//!
//! Prefixes are tested in this order; the first match wins.
//!
//! | Card Type | Prefix | Grouping |
//! |-----------|--------|----------|
//! | Visa | 4 | 4-4-4-4 |
//! | MasterCard | 51-55 | 4-4-4-4 |
//! | American Express | 34, 37 | 4-6-5 |
//! | Discover | 6011, 65 | 4-4-4-4 |
//! | Diners Club | 300-305, 36, 38 | 4-4-4-4 |
//! | JCB | 2131, 1800, 35 | 4-4-4-4 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize` for field state and labels |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly bindings |
//!
//! ## Security
//!
//! - Field text is zeroized when a `FieldState` is dropped
//! - `Debug` and `Display` show masked numbers only
//! - Log events carry digit counts, never digits
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod cursor;
pub mod detect;
pub mod error;
pub mod extract;
pub mod format;
pub mod luhn;
pub mod mask;
pub mod pipeline;
pub mod script;
pub mod session;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{CardType, Validity, MAX_CARD_DIGITS, MIN_VALIDATION_DIGITS};
pub use error::{ScriptError, ScriptErrorKind};
pub use pipeline::{process, process_with_cursor, FieldState};
pub use session::EditSession;

// Re-export the pipeline stages
pub use cursor::{reconcile_cursor, settle_cursor};
pub use detect::detect_card_type;
pub use extract::extract_digits;
pub use format::format_card_number;
pub use luhn::is_luhn_valid;

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA_16: &str = "4532015112830366";
    const VISA_13: &str = "4222222222222";
    const MASTERCARD: &str = "5500000000000004";
    const AMEX: &str = "378282246310005";
    const AMEX_13: &str = "3714496353984";
    const DISCOVER: &str = "6011000000000004";
    const DINERS: &str = "30569309025904";
    const JCB: &str = "3530111333300000";

    #[test]
    fn test_luhn_examples() {
        assert!(is_luhn_valid(VISA_16));
        assert!(!is_luhn_valid("4532015112830367"));
    }

    #[test]
    fn test_detector_examples() {
        assert_eq!(detect_card_type("6011000000000000"), CardType::Discover);
        assert_eq!(detect_card_type(AMEX_13), CardType::Amex);
    }

    #[test]
    fn test_all_networks() {
        let cases = [
            (VISA_16, CardType::Visa),
            (VISA_13, CardType::Visa),
            (MASTERCARD, CardType::MasterCard),
            (AMEX, CardType::Amex),
            (DISCOVER, CardType::Discover),
            (DINERS, CardType::DinersClub),
            (JCB, CardType::Jcb),
        ];
        for (number, expected) in cases {
            let state = process(number);
            assert_eq!(state.card_type(), expected, "{}", number);
            assert_eq!(state.validity(), Validity::Valid, "{}", number);
        }
    }

    #[test]
    fn test_grouping_examples() {
        assert_eq!(format_card_number("34"), "34");
        assert_eq!(format_card_number("341"), "341");
        assert_eq!(format_card_number("3412345678"), "3412 345678");
        assert_eq!(format_card_number("4412345678"), "4412 3456 78");
    }

    #[test]
    fn test_cursor_example() {
        assert_eq!(reconcile_cursor("4111 111", 4, "4111 1111"), 4);
    }

    #[test]
    fn test_digits_idempotent() {
        for number in [VISA_16, AMEX, DINERS, "3412345678", "4"] {
            let formatted = format_card_number(number);
            assert_eq!(extract_digits(&formatted), number);
            assert_eq!(format_card_number(&extract_digits(&formatted)), formatted);
        }
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldState>();
        assert_send_sync::<EditSession>();
        assert_send_sync::<ScriptError>();
        assert_send_sync::<CardType>();
    }
}
