//! Byte scanner shared by all grammar productions
//!
//! There is no token stream. Productions read the byte under the cursor
//! directly and consume terminals through [`Scanner::expect`] and
//! [`Scanner::test_and_skip`], both of which skip trailing whitespace and
//! `//` comments after a successful match.
//!
//! The cursor only moves forward and never passes the end of the input.

use super::classify::is_space;
use super::errors::{ErrorKind, SyntaxError};
use crate::constants::SNIPPET_LEN;

/// Location of the last identifier or number terminal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub len: usize,
}

impl Span {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Scan state over one source text
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    source: &'src [u8],
    position: usize,
    line: usize,
    line_start: usize,
    token: Span,
}

impl<'src> Scanner<'src> {
    /// Create a scanner at the start of `source`, line 1
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            line_start: 0,
            token: Span::default(),
        }
    }

    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the cursor
    pub fn column(&self) -> usize {
        self.position - self.line_start + 1
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Byte under the cursor
    pub fn peek(&self) -> Option<u8> {
        self.source.get(self.position).copied()
    }

    /// Check the byte under the cursor without consuming it
    pub fn at(&self, byte: u8) -> bool {
        self.peek() == Some(byte)
    }

    /// Span of the most recent identifier or number.
    /// Stale unless read right after one of them was parsed.
    pub fn token(&self) -> Span {
        self.token
    }

    pub(crate) fn set_token(&mut self, start: usize) {
        self.token = Span::new(start, self.position - start);
    }

    /// Source text of [`Scanner::token`]
    pub fn token_text(&self) -> &'src str {
        let bytes = &self.source[self.token.start..self.token.end()];
        // Identifiers and numbers are ASCII by construction
        std::str::from_utf8(bytes).unwrap_or_default()
    }

    /// Consume one byte, keeping the line counter current
    pub(crate) fn bump(&mut self) {
        if let Some(byte) = self.peek() {
            self.position += 1;
            if byte == b'\n' {
                self.line += 1;
                self.line_start = self.position;
            }
        }
    }

    /// Skip whitespace and `//` comments until neither is under the cursor.
    ///
    /// A comment ends before its newline; the next round of the loop consumes
    /// the newline as whitespace.
    pub fn skip_whitespace_and_comments(&mut self) {
        loop {
            while self.peek().is_some_and(is_space) {
                self.bump();
            }

            if self.source[self.position..].starts_with(b"//") {
                while self.peek().is_some_and(|b| b != b'\n') {
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    /// Consume exactly `expected`, then skip whitespace and comments
    pub fn expect(&mut self, expected: u8) -> Result<(), SyntaxError> {
        if !self.at(expected) {
            return Err(self.error(ErrorKind::UnexpectedCharacter {
                expected: expected as char,
            }));
        }
        self.bump();
        self.skip_whitespace_and_comments();
        Ok(())
    }

    /// Consume `keyword` if the input continues with it.
    ///
    /// No word-boundary check is made: `variable` matches `var`, leaving
    /// `iable` for the caller.
    pub fn test_and_skip(&mut self, keyword: &[u8]) -> bool {
        if !self.source[self.position..].starts_with(keyword) {
            return false;
        }
        for _ in 0..keyword.len() {
            self.bump();
        }
        self.skip_whitespace_and_comments();
        true
    }

    /// Build an error at the cursor, quoting the upcoming input
    pub fn error(&self, kind: ErrorKind) -> SyntaxError {
        let end = (self.position + SNIPPET_LEN).min(self.source.len());
        SyntaxError {
            kind,
            offset: self.position,
            line: self.line,
            column: self.column(),
            snippet: String::from_utf8_lossy(&self.source[self.position..end]).into_owned(),
        }
    }
}
