//! Statement parsing implementation
//!
//! ```text
//! statement   = declaration | assignment | expression , ";" ;
//! declaration = "var" , assignment , { "," , assignment } , ";" ;
//! assignment  = identifier , "=" , expression ;
//! ```
//!
//! Dispatch looks at the input only: `var` selects a declaration, a leading
//! letter selects an assignment, anything else is a bare expression. A call
//! such as `f(1);` therefore cannot stand alone as a statement, since the
//! leading letter commits to the assignment path and `=` is then required.

use crate::parser::classify::is_letter;
use crate::parser::errors::SyntaxError;
use crate::parser::parse::Parser;

impl<'src> Parser<'src> {
    /// Parse one statement including its terminating `;`
    pub(crate) fn parse_statement(&mut self) -> Result<(), SyntaxError> {
        if self.scanner.test_and_skip(b"var") {
            self.parse_declaration()?;
        } else if self.scanner.peek().is_some_and(is_letter) {
            self.parse_assignment()?;
        } else {
            self.parse_expression()?;
        }
        self.scanner.expect(b';')
    }

    /// Parse `assignment { "," assignment }` after the `var` keyword
    fn parse_declaration(&mut self) -> Result<(), SyntaxError> {
        loop {
            self.parse_assignment()?;
            if !self.scanner.test_and_skip(b",") {
                return Ok(());
            }
        }
    }

    fn parse_assignment(&mut self) -> Result<(), SyntaxError> {
        self.parse_identifier()?;
        self.scanner.expect(b'=')?;
        self.parse_expression()
    }
}
