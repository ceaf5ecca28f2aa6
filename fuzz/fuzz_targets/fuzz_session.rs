//! Fuzz target for edit sessions.
//!
//! Replays arbitrary edit sequences and checks the field stays consistent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use card_field::{format_card_number, EditSession, Validity, MIN_VALIDATION_DIGITS};

#[derive(Arbitrary, Debug)]
enum Edit {
    Insert(String),
    Paste(String),
    Backspace,
    Delete,
    Move(u8),
    Apply(String, u8),
    Clear,
}

fuzz_target!(|edits: Vec<Edit>| {
    let mut session = EditSession::new();

    for edit in edits {
        session = match edit {
            Edit::Insert(text) => session.insert(&text),
            Edit::Paste(text) => session.paste(&text),
            Edit::Backspace => session.backspace(),
            Edit::Delete => session.delete_forward(),
            Edit::Move(to) => session.move_cursor(to as usize),
            Edit::Apply(raw, cursor) => session.apply(&raw, cursor as usize),
            Edit::Clear => session.clear(),
        };

        let digits = session.digits();
        assert_eq!(format_card_number(&digits), session.formatted());
        assert!(session.cursor() <= session.formatted().len());
        if digits.len() < MIN_VALIDATION_DIGITS {
            assert_eq!(session.validity(), Validity::Unknown);
        }
    }
});
