//! Syntax error types
//!
//! Every grammar expectation that fails produces a [`SyntaxError`], which is
//! propagated with `?` through all productions back to the driver. Parsing never
//! recovers: the first error ends the run.
//!
//! [`ErrorMessage`] is the bounded, overwrite-only text buffer kept on the
//! engine after a failed run.

use crate::constants::MESSAGE_CAPACITY;
use std::fmt;

/// What went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A specific byte was required (`';'` for an unterminated statement)
    UnexpectedCharacter { expected: char },

    /// An identifier must start with a letter or `'_'`
    InvalidIdentifier,

    /// A number must start with a digit
    InvalidNumber,

    /// Expressions nested deeper than the configured limit
    NestingTooDeep { limit: usize },
}

impl ErrorKind {
    /// Text describing the failed condition
    pub fn condition(&self) -> String {
        match self {
            ErrorKind::UnexpectedCharacter { expected } => format!("expected '{}'", expected),
            ErrorKind::InvalidIdentifier => "expected letter or '_'".to_string(),
            ErrorKind::InvalidNumber => "expected digit".to_string(),
            ErrorKind::NestingTooDeep { limit } => format!("nesting depth exceeds {}", limit),
        }
    }
}

/// A syntax error with its position in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: ErrorKind,
    /// Byte offset of the failing position
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    /// Upcoming input at the failing position
    pub snippet: String,
}

impl SyntaxError {
    /// Diagnostic text without position: `[<snippet>]: <condition>`
    pub fn message(&self) -> String {
        format!("[{}]: {}", self.snippet, self.kind.condition())
    }

    /// True for the resource-limit error, as opposed to malformed input
    pub fn is_limit(&self) -> bool {
        matches!(self.kind, ErrorKind::NestingTooDeep { .. })
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.line,
            self.column,
            self.message()
        )
    }
}

impl std::error::Error for SyntaxError {}

/// Fixed-capacity diagnostic text.
///
/// Holds at most `MESSAGE_CAPACITY - 1` bytes. Longer text is cut on a char
/// boundary and `truncated` is set. Each `set` replaces the previous content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMessage {
    text: String,
    truncated: bool,
}

impl ErrorMessage {
    pub const MAX_LEN: usize = MESSAGE_CAPACITY - 1;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, message: &str) {
        let mut end = message.len().min(Self::MAX_LEN);
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        self.text.clear();
        self.text.push_str(&message[..end]);
        self.truncated = end < message.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.truncated = false;
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
