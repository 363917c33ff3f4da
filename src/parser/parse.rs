//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and the program-level entry
//! point. Grammar productions live in sibling modules as further
//! `impl Parser` blocks:
//! - `statements`: statements, `var` declarations, assignments
//! - `expressions`: expressions, terms, factors, calls, identifiers, numbers
//!
//! Every production returns `Result<_, SyntaxError>`. The first failure is
//! propagated with `?` all the way out of [`Parser::parse_program`]; nothing is
//! recovered and no syntax tree is built.

use crate::constants::Limits;
use crate::parser::errors::{ErrorKind, SyntaxError};
use crate::parser::scanner::{Scanner, Span};

/// Recursive descent parser over one source text
pub struct Parser<'src> {
    pub(crate) scanner: Scanner<'src>,
    pub(crate) depth: usize,
    pub(crate) limits: Limits,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src [u8]) -> Self {
        Self::with_limits(source, Limits::default())
    }

    /// Create a parser with leading whitespace and comments already skipped.
    /// `limits` is re-clamped, so a struct literal cannot lift the cap.
    pub fn with_limits(source: &'src [u8], limits: Limits) -> Self {
        let mut scanner = Scanner::new(source);
        scanner.skip_whitespace_and_comments();
        Self {
            scanner,
            depth: 0,
            limits: Limits::new(limits.max_depth),
        }
    }

    /// Parse statements until the input is exhausted
    pub fn parse_program(&mut self) -> Result<(), SyntaxError> {
        // An earlier failed call may have left nesting levels open
        self.depth = 0;
        while !self.scanner.is_at_end() {
            self.parse_statement()?;
        }
        Ok(())
    }

    pub fn line(&self) -> usize {
        self.scanner.line()
    }

    pub fn position(&self) -> usize {
        self.scanner.position()
    }

    /// Span of the most recent identifier or number
    pub fn token(&self) -> Span {
        self.scanner.token()
    }

    pub fn token_text(&self) -> &'src str {
        self.scanner.token_text()
    }

    // ===== Helper methods =====

    /// Enter one level of expression nesting
    pub(crate) fn enter(&mut self) -> Result<(), SyntaxError> {
        if self.depth >= self.limits.max_depth {
            return Err(self.scanner.error(ErrorKind::NestingTooDeep {
                limit: self.limits.max_depth,
            }));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_DEPTH_LIMIT;

    #[test]
    fn test_parse_empty_program() {
        let mut parser = Parser::new(b"");
        assert!(parser.parse_program().is_ok());

        let mut parser = Parser::new(b"  \n\n // only a comment");
        assert!(parser.parse_program().is_ok());
        assert_eq!(parser.line(), 3);
    }

    #[test]
    fn test_parse_statements() {
        let mut parser = Parser::new(b"var a = 1;\nb = a * (2 + 3);\n4 - 1;");
        assert!(parser.parse_program().is_ok());
        assert_eq!(parser.line(), 3);
        assert_eq!(parser.depth, 0);
    }

    #[test]
    fn test_error_stops_at_first_violation() {
        let mut parser = Parser::new(b"a = 1;\nb = ;\nc = ;");
        let err = parser.parse_program().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidNumber);
        assert_eq!(err.line, 2);
        assert_eq!(err.column, 5);
        assert_eq!(err.snippet, ";\nc = ;");
    }

    #[test]
    fn test_depth_limit() {
        let mut parser = Parser::with_limits(b"x = ((1));", Limits::new(3));
        assert!(parser.parse_program().is_ok());

        let mut parser = Parser::with_limits(b"x = (((1)));", Limits::new(3));
        let err = parser.parse_program().unwrap_err();
        assert_eq!(err.kind, ErrorKind::NestingTooDeep { limit: 3 });
        assert_eq!(err.snippet, "1)));");
    }

    #[test]
    fn test_depth_cap_ignores_struct_literal() {
        let parser = Parser::with_limits(b"", Limits { max_depth: usize::MAX });
        assert_eq!(parser.limits.max_depth, MAX_DEPTH_LIMIT);
    }

    #[test]
    fn test_depth_resets_after_failure() {
        let mut parser = Parser::with_limits(b"x = ((1;\ny = (2);", Limits::new(3));
        let err = parser.parse_program().unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedCharacter { expected: ')' });
        assert_eq!(parser.depth, 2);

        // Resuming at the failure point skips the bad byte and parses on
        parser.scanner.bump();
        parser.scanner.skip_whitespace_and_comments();
        assert!(parser.parse_program().is_ok());
        assert_eq!(parser.depth, 0);
    }
}
