//! One synchronous run of the input pipeline.
//!
//! Every edit of the field goes through the same chain:
//!
//! 1. Digit extraction (non-digits dropped)
//! 2. Clamping to [`MAX_CARD_DIGITS`](crate::MAX_CARD_DIGITS)
//! 3. Formatting, which detects the card type
//! 4. Validity, which runs Luhn only from
//!    [`MIN_VALIDATION_DIGITS`](crate::MIN_VALIDATION_DIGITS) digits up
//! 5. Caret reconciliation
//!
//! Nothing is cached between runs; the result is a fresh [`FieldState`].

use std::fmt;

use tracing::trace;
use zeroize::Zeroize;

use crate::card::{CardType, Validity};
use crate::cursor::settle_cursor;
use crate::detect::detect_card_type;
use crate::extract::{extract_clamped, extract_digits, is_digit_string};
use crate::format::format_card_number;
use crate::mask::mask_digits;

/// Everything the presentation layer needs to render the field.
///
/// The formatted number is wiped from memory on drop, and `Debug` shows it
/// masked.
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldState {
    formatted: String,
    card_type: CardType,
    validity: Validity,
    cursor: usize,
}

impl FieldState {
    /// The grouped number to display.
    #[inline]
    pub fn formatted(&self) -> &str {
        &self.formatted
    }

    /// The digits alone.
    #[inline]
    pub fn digits(&self) -> String {
        extract_digits(&self.formatted)
    }

    /// Number of digits in the field.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.formatted.bytes().filter(u8::is_ascii_digit).count()
    }

    /// The detected card network.
    #[inline]
    pub const fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Checksum state for the current digits.
    #[inline]
    pub const fn validity(&self) -> Validity {
        self.validity
    }

    /// Caret position as a char offset into [`formatted`](Self::formatted).
    #[inline]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true if the field holds no digits.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.formatted.is_empty()
    }

    /// Length of the formatted text in chars (the text is ASCII).
    #[inline]
    pub fn len(&self) -> usize {
        self.formatted.len()
    }

    /// Copy of this state with the caret moved, clamped to the text.
    pub(crate) fn with_cursor(&self, cursor: usize) -> Self {
        let mut state = self.clone();
        state.cursor = cursor.min(state.len());
        state
    }

    /// Masked rendering safe for logs.
    pub fn masked(&self) -> String {
        mask_digits(&self.formatted)
    }
}

impl fmt::Debug for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldState")
            .field("formatted", &self.masked())
            .field("card_type", &self.card_type)
            .field("validity", &self.validity)
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl fmt::Display for FieldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.card_type, self.masked(), self.validity)
    }
}

impl Drop for FieldState {
    fn drop(&mut self) {
        self.formatted.zeroize();
    }
}

/// Runs the pipeline with the caret placed at the end of the result.
///
/// # Example
///
/// ```
/// use card_field::pipeline::process;
/// use card_field::{CardType, Validity};
///
/// let state = process("4532-0151-1283-0366");
/// assert_eq!(state.formatted(), "4532 0151 1283 0366");
/// assert_eq!(state.card_type(), CardType::Visa);
/// assert_eq!(state.validity(), Validity::Valid);
/// assert_eq!(state.cursor(), 19);
/// ```
pub fn process(raw: &str) -> FieldState {
    let state = run(raw, None);
    trace_state(&state);
    state
}

/// Runs the pipeline for an edited field value with its caret.
///
/// `raw` is the text as the user left it and `cursor` the caret within it,
/// as a char offset.
///
/// # Example
///
/// ```
/// use card_field::pipeline::process_with_cursor;
///
/// let state = process_with_cursor("41111", 5);
/// assert_eq!(state.formatted(), "4111 1");
/// assert_eq!(state.cursor(), 6);
/// ```
pub fn process_with_cursor(raw: &str, cursor: usize) -> FieldState {
    let state = run(raw, Some(cursor));
    trace_state(&state);
    state
}

fn run(raw: &str, cursor: Option<usize>) -> FieldState {
    let mut digits = extract_clamped(raw);
    debug_assert!(is_digit_string(&digits));
    let card_type = detect_card_type(&digits);
    let formatted = format_card_number(&digits);
    let validity = Validity::from_digits(&digits);
    digits.zeroize();

    let cursor = match cursor {
        Some(offset) => settle_cursor(raw, offset, &formatted),
        None => formatted.len(),
    };

    FieldState {
        formatted,
        card_type,
        validity,
        cursor,
    }
}

fn trace_state(state: &FieldState) {
    trace!(
        digits = state.digit_count(),
        card_type = %state.card_type,
        validity = %state.validity,
        cursor = state.cursor,
        "field processed"
    );
}
