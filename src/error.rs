//! Error types for edit scripts.
//!
//! The input pipeline itself never fails: malformed input is normalized and
//! the worst outcome is an `Invalid` or `Unknown` field. Errors only arise
//! when parsing the textual edit scripts replayed by the CLI and tests.

use std::fmt;

/// A line of an edit script that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// 1-based line number in the script.
    pub line: usize,
    /// What went wrong on that line.
    pub kind: ScriptErrorKind,
}

impl ScriptError {
    pub(crate) fn new(line: usize, kind: ScriptErrorKind) -> Self {
        Self { line, kind }
    }
}

/// The reason a script line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptErrorKind {
    /// The command word is not recognized.
    UnknownCommand {
        /// The word that was found.
        command: String,
    },

    /// The command requires an argument and none was given.
    MissingArgument {
        /// The command missing its argument.
        command: &'static str,
    },

    /// An argument that should be a non-negative integer is not.
    InvalidNumber {
        /// The command the argument belongs to.
        command: &'static str,
        /// The offending text.
        value: String,
    },

    /// The command takes no (or fewer) arguments than were given.
    UnexpectedArgument {
        /// The command that received the extra text.
        command: &'static str,
        /// The extra text.
        value: String,
    },
}

impl fmt::Display for ScriptErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCommand { command } => {
                write!(f, "unknown command '{}'", command.escape_default())
            }

            Self::MissingArgument { command } => {
                write!(f, "'{}' requires an argument", command)
            }

            Self::InvalidNumber { command, value } => {
                write!(
                    f,
                    "'{}' expects a non-negative number, got '{}'",
                    command,
                    value.escape_default()
                )
            }

            Self::UnexpectedArgument { command, value } => {
                write!(
                    f,
                    "'{}' does not take the argument '{}'",
                    command,
                    value.escape_default()
                )
            }
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

impl std::error::Error for ScriptError {}
