//! Line-oriented edit scripts.
//!
//! A script describes a sequence of edits to replay against an
//! [`EditSession`], which makes caret behavior reproducible outside a UI.
//! One command per line; blank lines and lines starting with `#` are ignored.
//!
//! | Command | Effect |
//! |---------|--------|
//! | `type <text>` | Type text at the caret |
//! | `paste <text>` | Paste text at the caret as one edit |
//! | `backspace [n]` | Delete before the caret, `n` times (default 1) |
//! | `delete [n]` | Delete after the caret, `n` times (default 1) |
//! | `move <offset>` | Move the caret |
//! | `clear` | Empty the field |
//! | `set <raw> [@offset]` | Replace the raw field value, caret at `offset` or the end |
//!
//! # Example
//!
//! ```
//! use card_field::script::{parse_script, run_script};
//!
//! let commands = parse_script("type 4111\ntype 1\nbackspace").unwrap();
//! let states = run_script(&commands);
//! assert_eq!(states[1].formatted(), "4111 1");
//! assert_eq!(states[2].formatted(), "4111");
//! ```

use std::fmt;

use tracing::debug;

use crate::error::{ScriptError, ScriptErrorKind};
use crate::pipeline::FieldState;
use crate::session::EditSession;

/// A single scripted edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Type text at the caret.
    Type(String),
    /// Paste text at the caret.
    Paste(String),
    /// Backspace this many times.
    Backspace(usize),
    /// Forward-delete this many times.
    Delete(usize),
    /// Move the caret to this offset.
    Move(usize),
    /// Empty the field.
    Clear,
    /// Replace the raw field value.
    Set {
        /// The raw value, before formatting.
        raw: String,
        /// Caret within `raw`; `None` puts it at the end.
        cursor: Option<usize>,
    },
}

impl EditCommand {
    /// Applies the command, returning the next session.
    pub fn apply(&self, session: &EditSession) -> EditSession {
        match self {
            Self::Type(text) => session.insert(text),
            Self::Paste(text) => session.paste(text),
            Self::Backspace(count) => repeat(session, *count, EditSession::backspace),
            Self::Delete(count) => repeat(session, *count, EditSession::delete_forward),
            Self::Move(to) => session.move_cursor(*to),
            Self::Clear => session.clear(),
            Self::Set { raw, cursor } => {
                let cursor = cursor.unwrap_or_else(|| raw.chars().count());
                session.apply(raw, cursor)
            }
        }
    }
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(text) => write!(f, "type {}", text),
            Self::Paste(text) => write!(f, "paste {}", text),
            Self::Backspace(count) => write!(f, "backspace {}", count),
            Self::Delete(count) => write!(f, "delete {}", count),
            Self::Move(to) => write!(f, "move {}", to),
            Self::Clear => write!(f, "clear"),
            // A trailing `@` token would read back as a caret, so spell out the end
            Self::Set { raw, cursor: None } if ends_with_caret_token(raw) => {
                write!(f, "set {} @{}", raw, raw.chars().count())
            }
            Self::Set { raw, cursor: None } => write!(f, "set {}", raw),
            Self::Set {
                raw,
                cursor: Some(cursor),
            } => write!(f, "set {} @{}", raw, cursor),
        }
    }
}

fn ends_with_caret_token(raw: &str) -> bool {
    raw.split_whitespace().last().map_or(false, |token| token.starts_with('@'))
}

/// Applies `edit` up to `count` times, stopping once it no longer changes
/// the field.
fn repeat(session: &EditSession, count: usize, edit: fn(&EditSession) -> EditSession) -> EditSession {
    let mut current = session.clone();
    for _ in 0..count {
        let next = edit(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns the first line that cannot be parsed.
pub fn parse_script(text: &str) -> Result<Vec<EditCommand>, ScriptError> {
    let mut commands = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(command) = parse_line(line).map_err(|kind| ScriptError::new(index + 1, kind))? {
            commands.push(command);
        }
    }
    debug!(commands = commands.len(), "script parsed");
    Ok(commands)
}

/// Parses one line; `Ok(None)` for blank and comment lines.
fn parse_line(line: &str) -> Result<Option<EditCommand>, ScriptErrorKind> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word {
        "type" => EditCommand::Type(required_text("type", rest)?),
        "paste" => EditCommand::Paste(required_text("paste", rest)?),
        "backspace" => EditCommand::Backspace(optional_count("backspace", rest)?),
        "delete" => EditCommand::Delete(optional_count("delete", rest)?),
        "move" => {
            if rest.is_empty() {
                return Err(ScriptErrorKind::MissingArgument { command: "move" });
            }
            EditCommand::Move(parse_number("move", rest)?)
        }
        "clear" => {
            if !rest.is_empty() {
                return Err(ScriptErrorKind::UnexpectedArgument {
                    command: "clear",
                    value: rest.to_string(),
                });
            }
            EditCommand::Clear
        }
        "set" => parse_set(rest)?,
        other => {
            return Err(ScriptErrorKind::UnknownCommand {
                command: other.to_string(),
            })
        }
    };

    Ok(Some(command))
}

fn required_text(command: &'static str, rest: &str) -> Result<String, ScriptErrorKind> {
    if rest.is_empty() {
        Err(ScriptErrorKind::MissingArgument { command })
    } else {
        Ok(rest.to_string())
    }
}

fn optional_count(command: &'static str, rest: &str) -> Result<usize, ScriptErrorKind> {
    if rest.is_empty() {
        return Ok(1);
    }
    if rest.split_whitespace().count() > 1 {
        return Err(ScriptErrorKind::UnexpectedArgument {
            command,
            value: rest.to_string(),
        });
    }
    parse_number(command, rest)
}

fn parse_number(command: &'static str, value: &str) -> Result<usize, ScriptErrorKind> {
    value.parse().map_err(|_| ScriptErrorKind::InvalidNumber {
        command,
        value: value.to_string(),
    })
}

fn parse_set(rest: &str) -> Result<EditCommand, ScriptErrorKind> {
    if rest.is_empty() {
        return Err(ScriptErrorKind::MissingArgument { command: "set" });
    }

    // A trailing `@N` token is the caret
    if let Some((raw, last)) = rest.rsplit_once(char::is_whitespace) {
        if let Some(offset) = last.strip_prefix('@') {
            return Ok(EditCommand::Set {
                raw: raw.trim_end().to_string(),
                cursor: Some(parse_number("set", offset)?),
            });
        }
    }

    Ok(EditCommand::Set {
        raw: rest.to_string(),
        cursor: None,
    })
}

/// Replays commands from an empty field, returning the state after each one.
pub fn run_script(commands: &[EditCommand]) -> Vec<FieldState> {
    run_script_from(&EditSession::new(), commands)
}

/// Replays commands starting from an existing session.
pub fn run_script_from(session: &EditSession, commands: &[EditCommand]) -> Vec<FieldState> {
    let mut current = session.clone();
    let mut states = Vec::with_capacity(commands.len());
    for command in commands {
        current = command.apply(&current);
        states.push(current.state().clone());
    }
    states
}
