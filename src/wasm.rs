//! WebAssembly bindings for browser card number fields.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { CardField, formatCardNumber } from 'card_field';
//!
//! await init();
//!
//! const field = new CardField();
//! input.addEventListener('input', () => {
//!     const result = field.handleInput(input.value, input.selectionStart);
//!     input.value = result.formatted;
//!     input.setSelectionRange(result.cursor, result.cursor);
//!     icon.dataset.state = result.validity; // "unknown" | "valid" | "invalid"
//!     label.textContent = result.cardType;
//! });
//! ```
//!
//! `selectionStart` counts UTF-16 code units; the pipeline counts chars. The
//! two agree for everything a card field holds after formatting.

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::pipeline::FieldState;
use crate::session::EditSession;

/// Result of one edit, returned to JavaScript.
#[wasm_bindgen]
pub struct FieldResult {
    formatted: String,
    card_type: String,
    validity: String,
    valid: Option<bool>,
    cursor: usize,
}

#[wasm_bindgen]
impl FieldResult {
    #[wasm_bindgen(getter)]
    pub fn formatted(&self) -> String {
        self.formatted.clone()
    }

    #[wasm_bindgen(getter, js_name = cardType)]
    pub fn card_type(&self) -> String {
        self.card_type.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn validity(&self) -> String {
        self.validity.clone()
    }

    /// `true`/`false` once judged, `undefined` below the digit threshold.
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> Option<bool> {
        self.valid
    }

    #[wasm_bindgen(getter)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl From<&FieldState> for FieldResult {
    fn from(state: &FieldState) -> Self {
        Self {
            formatted: state.formatted().to_string(),
            card_type: state.card_type().name().to_string(),
            validity: state.validity().as_str().to_string(),
            valid: state.validity().as_option(),
            cursor: state.cursor(),
        }
    }
}

/// A card number field bound to one text input.
#[wasm_bindgen]
pub struct CardField {
    session: EditSession,
}

#[wasm_bindgen]
impl CardField {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CardField {
        CardField {
            session: EditSession::new(),
        }
    }

    /// Normalizes the input's value after the browser applied an edit.
    #[wasm_bindgen(js_name = handleInput)]
    pub fn handle_input(&mut self, value: &str, cursor: usize) -> FieldResult {
        self.session = self.session.apply(value, cursor);
        FieldResult::from(self.session.state())
    }

    /// Pastes clipboard text at the current caret as one edit.
    #[wasm_bindgen(js_name = handlePaste)]
    pub fn handle_paste(&mut self, text: &str) -> FieldResult {
        self.session = self.session.paste(text);
        FieldResult::from(self.session.state())
    }

    /// Empties the field.
    pub fn clear(&mut self) -> FieldResult {
        self.session = self.session.clear();
        FieldResult::from(self.session.state())
    }
}

impl Default for CardField {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a card number with space separators.
#[wasm_bindgen(js_name = formatCardNumber)]
pub fn format_card_number(input: &str) -> String {
    crate::format::format_card_number(input)
}

/// Detects the card network label.
#[wasm_bindgen(js_name = detectCardType)]
pub fn detect_card_type(input: &str) -> String {
    let digits = crate::extract::extract_digits(input);
    crate::detect::detect_card_type(&digits).name().to_string()
}

/// Checks the Luhn checksum.
#[wasm_bindgen(js_name = isLuhnValid)]
pub fn is_luhn_valid(input: &str) -> bool {
    crate::luhn::is_luhn_valid(input)
}

/// Returns the display groups as a JavaScript array of strings.
#[wasm_bindgen(js_name = splitIntoGroups)]
pub fn split_into_groups(input: &str) -> js_sys::Array {
    crate::format::split_into_groups(input)
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Caret offset after reformatting.
#[wasm_bindgen(js_name = reconcileCursor)]
pub fn reconcile_cursor(old_raw: &str, old_offset: usize, new_formatted: &str) -> usize {
    crate::cursor::reconcile_cursor(old_raw, old_offset, new_formatted)
}
