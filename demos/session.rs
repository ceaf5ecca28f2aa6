//! Interactive editing example.
//!
//! Drives an [`EditSession`] the way a text field would and prints the field
//! after every edit, with `|` marking the caret.
//!
//! Run with: `cargo run --example session`

use card_field::script::{parse_script, run_script};
use card_field::{EditSession, FieldState};

fn show(label: &str, state: &FieldState) {
    let mut with_caret: String = state.formatted().chars().take(state.cursor()).collect();
    with_caret.push('|');
    with_caret.extend(state.formatted().chars().skip(state.cursor()));
    println!(
        "  {:<20} [{:<24}] {} / {}",
        label,
        with_caret,
        state.card_type(),
        state.validity()
    );
}

fn main() {
    println!("=== Interactive Editing ===\n");

    // -------------------------------------------------------------------------
    // Typing one digit at a time
    // -------------------------------------------------------------------------
    println!("--- Typing an Amex number ---\n");

    let mut session = EditSession::new();
    for c in "378282246310005".chars() {
        let mut buf = [0u8; 4];
        session = session.insert(c.encode_utf8(&mut buf));
        show(&format!("type {}", c), session.state());
    }
    println!();

    // -------------------------------------------------------------------------
    // Fixing a typo in the middle
    // -------------------------------------------------------------------------
    println!("--- Fixing a typo ---\n");

    let session = EditSession::from_input("4111 1911 1111 1111");
    show("start", session.state());
    let session = session.move_cursor(7);
    show("move 7", session.state());
    let session = session.backspace();
    show("backspace", session.state());
    let session = session.insert("1");
    show("type 1", session.state());
    println!();

    // -------------------------------------------------------------------------
    // Pasting and deleting across separators
    // -------------------------------------------------------------------------
    println!("--- Paste and separators ---\n");

    let session = EditSession::new().paste("4532-0151-1283-0366");
    show("paste", session.state());
    let session = session.move_cursor(5);
    show("move 5", session.state());
    // The caret sits after a separator; backspace removes the digit before it
    let session = session.backspace();
    show("backspace", session.state());
    let session = session.clear();
    show("clear", session.state());
    println!();

    // -------------------------------------------------------------------------
    // Edit scripts
    // -------------------------------------------------------------------------
    println!("--- Replaying a script ---\n");

    let script = "\
# Discover, typed and then corrected
type 6011
type 1111 1111 1118
backspace
type 7
";

    match parse_script(script) {
        Ok(commands) => {
            for (command, state) in commands.iter().zip(run_script(&commands)) {
                show(&command.to_string(), &state);
            }
        }
        Err(e) => println!("  Error: {}", e),
    }
}
