//! Interactive editing session for a single card number field.
//!
//! An [`EditSession`] is an immutable snapshot of the field. Every edit
//! returns a brand new session built by a full pipeline run, so the text,
//! card type, validity and caret can never disagree with each other.
//!
//! # Example
//!
//! ```
//! use card_field::{EditSession, CardType, Validity};
//!
//! let session = EditSession::new()
//!     .insert("4532")
//!     .insert("0151")
//!     .paste("1283 0366");
//!
//! assert_eq!(session.formatted(), "4532 0151 1283 0366");
//! assert_eq!(session.card_type(), CardType::Visa);
//! assert_eq!(session.validity(), Validity::Valid);
//! assert_eq!(session.cursor(), 19);
//!
//! let edited = session.backspace();
//! assert_eq!(edited.formatted(), "4532 0151 1283 036");
//! assert_eq!(edited.validity(), Validity::Invalid);
//! ```

use tracing::debug;
use zeroize::Zeroize;

use crate::card::{CardType, Validity};
use crate::format::SEPARATOR;
use crate::pipeline::{process, process_with_cursor, FieldState};

/// Snapshot of the field between two edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    state: FieldState,
}

impl EditSession {
    /// Creates a session for an empty field.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session pre-filled with `raw`, caret at the end.
    pub fn from_input(raw: &str) -> Self {
        Self {
            state: process(raw),
        }
    }

    /// The full state of the field.
    #[inline]
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// The grouped number to display.
    #[inline]
    pub fn formatted(&self) -> &str {
        self.state.formatted()
    }

    /// The digits alone.
    #[inline]
    pub fn digits(&self) -> String {
        self.state.digits()
    }

    /// The detected card network.
    #[inline]
    pub fn card_type(&self) -> CardType {
        self.state.card_type()
    }

    /// Checksum state for the current digits.
    #[inline]
    pub fn validity(&self) -> Validity {
        self.state.validity()
    }

    /// Caret position as a char offset into the formatted text.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.state.cursor()
    }

    /// Replaces the whole field value, as a text widget's input event would.
    ///
    /// `raw` is the value the widget now holds and `cursor` the caret inside
    /// it. This is the entry point for callers that let the widget perform
    /// the edit and only need it normalized.
    pub fn apply(&self, raw: &str, cursor: usize) -> Self {
        let next = Self {
            state: process_with_cursor(raw, cursor),
        };
        debug!(
            op = "apply",
            digits = next.state.digit_count(),
            cursor = next.cursor(),
            "field edited"
        );
        next
    }

    /// Types `text` at the caret.
    ///
    /// Non-digit characters are dropped before splicing, the way the field's
    /// key filter would reject them.
    pub fn insert(&self, text: &str) -> Self {
        self.splice_digits("insert", text)
    }

    /// Pastes `text` at the caret as one atomic edit.
    ///
    /// Separators and other noise in the clipboard are discarded; anything
    /// past the maximum digit count is truncated.
    pub fn paste(&self, text: &str) -> Self {
        self.splice_digits("paste", text)
    }

    /// Deletes the character before the caret.
    ///
    /// When that character is a group separator the digit in front of it is
    /// removed instead, otherwise the separator would just be reinserted.
    pub fn backspace(&self) -> Self {
        let cursor = self.cursor();
        if cursor == 0 {
            return self.clone();
        }

        let chars: Vec<char> = self.formatted().chars().collect();
        let remove = if chars[cursor - 1] == SEPARATOR && cursor >= 2 {
            cursor - 2
        } else {
            cursor - 1
        };

        self.remove_at("backspace", &chars, remove, remove)
    }

    /// Deletes the character after the caret.
    ///
    /// A separator right after the caret is skipped and the following digit
    /// removed.
    pub fn delete_forward(&self) -> Self {
        let cursor = self.cursor();
        let chars: Vec<char> = self.formatted().chars().collect();
        if cursor >= chars.len() {
            return self.clone();
        }

        let remove = if chars[cursor] == SEPARATOR && cursor + 1 < chars.len() {
            cursor + 1
        } else {
            cursor
        };

        self.remove_at("delete", &chars, remove, cursor)
    }

    /// Moves the caret without touching the text.
    ///
    /// Offsets past the end land at the end.
    pub fn move_cursor(&self, to: usize) -> Self {
        Self {
            state: self.state.with_cursor(to),
        }
    }

    /// Empties the field.
    pub fn clear(&self) -> Self {
        debug!(op = "clear", "field edited");
        Self::new()
    }

    fn splice_digits(&self, op: &'static str, text: &str) -> Self {
        let cursor = self.cursor();
        let mut inserted: String = text.chars().filter(char::is_ascii_digit).collect();

        let mut raw = String::with_capacity(self.formatted().len() + inserted.len());
        raw.extend(self.formatted().chars().take(cursor));
        raw.push_str(&inserted);
        raw.extend(self.formatted().chars().skip(cursor));

        let next = Self {
            state: process_with_cursor(&raw, cursor + inserted.len()),
        };
        raw.zeroize();
        inserted.zeroize();

        debug!(
            op,
            digits = next.state.digit_count(),
            cursor = next.cursor(),
            "field edited"
        );
        next
    }

    fn remove_at(&self, op: &'static str, chars: &[char], index: usize, cursor: usize) -> Self {
        let mut raw: String = chars
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, &c)| c)
            .collect();

        let next = Self {
            state: process_with_cursor(&raw, cursor),
        };
        raw.zeroize();

        debug!(
            op,
            digits = next.state.digit_count(),
            cursor = next.cursor(),
            "field edited"
        );
        next
    }
}

impl From<FieldState> for EditSession {
    fn from(state: FieldState) -> Self {
        Self { state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_each(digits: &str) -> Vec<EditSession> {
        let mut sessions = vec![EditSession::new()];
        for c in digits.chars() {
            let next = sessions[sessions.len() - 1].insert(&c.to_string());
            sessions.push(next);
        }
        sessions
    }

    #[test]
    fn test_typing_keeps_caret_at_end() {
        for session in type_each("4532015112830366") {
            assert_eq!(session.cursor(), session.formatted().len());
        }
    }

    #[test]
    fn test_typing_validity_transitions() {
        let sessions = type_each("4532015112830366");
        for session in &sessions[..13] {
            assert_eq!(session.validity(), Validity::Unknown);
        }
        assert_eq!(sessions[16].validity(), Validity::Valid);
        // 13 digits onward are judged every time
        assert_ne!(sessions[13].validity(), Validity::Unknown);
    }

    #[test]
    fn test_typing_amex_regroups() {
        let sessions = type_each("3412345678");
        assert_eq!(sessions[1].formatted(), "3");
        assert_eq!(sessions[1].card_type(), CardType::Unknown);
        assert_eq!(sessions[2].card_type(), CardType::Amex);
        assert_eq!(sessions[5].formatted(), "3412 3");
        assert_eq!(sessions[10].formatted(), "3412 345678");
        assert_eq!(sessions[10].cursor(), 11);
    }

    #[test]
    fn test_insert_in_middle() {
        let session = EditSession::from_input("41111111").move_cursor(1);
        let next = session.insert("2");
        assert_eq!(next.formatted(), "4211 1111 1");
        assert_eq!(next.cursor(), 2);
    }

    #[test]
    fn test_insert_before_separator() {
        let session = EditSession::from_input("41111").move_cursor(4);
        let next = session.insert("9");
        assert_eq!(next.formatted(), "4111 91");
        assert_eq!(next.cursor(), 6);
    }

    #[test]
    fn test_insert_drops_noise() {
        let session = EditSession::from_input("4111").insert("a-b");
        assert_eq!(session.formatted(), "4111");
        assert_eq!(session.cursor(), 4);
    }

    #[test]
    fn test_paste_is_atomic() {
        let session = EditSession::new().paste("4532-0151-1283-0366");
        assert_eq!(session.formatted(), "4532 0151 1283 0366");
        assert_eq!(session.validity(), Validity::Valid);
        assert_eq!(session.cursor(), 19);
    }

    #[test]
    fn test_paste_truncates() {
        let session = EditSession::from_input("4111 1111 1111 1111").paste("99999");
        assert_eq!(session.digits().len(), 19);
        assert_eq!(session.formatted(), "4111 1111 1111 1111 999");
        assert_eq!(session.cursor(), 23);
    }

    #[test]
    fn test_backspace_digit() {
        let session = EditSession::from_input("41111").backspace();
        assert_eq!(session.formatted(), "4111");
        assert_eq!(session.cursor(), 4);
    }

    #[test]
    fn test_backspace_over_separator() {
        let session = EditSession::from_input("41111").move_cursor(5).backspace();
        assert_eq!(session.formatted(), "4111");
        assert_eq!(session.cursor(), 3);
    }

    #[test]
    fn test_backspace_at_start() {
        let session = EditSession::from_input("4111").move_cursor(0);
        assert_eq!(session.backspace(), session);
    }

    #[test]
    fn test_delete_forward() {
        let session = EditSession::from_input("41112222").move_cursor(4).delete_forward();
        assert_eq!(session.formatted(), "4111 222");
        assert_eq!(session.cursor(), 4);

        let session = EditSession::from_input("4111").delete_forward();
        assert_eq!(session.formatted(), "4111");
    }

    #[test]
    fn test_move_cursor_clamps() {
        let session = EditSession::from_input("4111 1").move_cursor(42);
        assert_eq!(session.cursor(), 6);
    }

    #[test]
    fn test_clear() {
        let session = EditSession::from_input("4532015112830366").clear();
        assert_eq!(session.formatted(), "");
        assert_eq!(session.validity(), Validity::Unknown);
        assert_eq!(session.card_type(), CardType::Unknown);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_edits_do_not_mutate_previous() {
        let first = EditSession::from_input("4111");
        let second = first.insert("1");
        assert_eq!(first.formatted(), "4111");
        assert_eq!(second.formatted(), "4111 1");
    }

    #[test]
    fn test_apply_widget_value() {
        let session = EditSession::new().apply("4111 11111", 10);
        assert_eq!(session.formatted(), "4111 1111 1");
        assert_eq!(session.cursor(), 11);
    }
}
