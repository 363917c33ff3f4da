//! Expression parsing implementation
//!
//! ```text
//! expression  = term , { ("+" | "-") , term } ;
//! term        = factor , { ("*" | "/") , factor } ;
//! factor      = number
//!             | identifier , [ "(" , { expression , [","] } , ")" ]
//!             | "(" , expression , ")" ;
//! identifier  = (letter | "_") , { letter | digit | "_" } ;
//! number      = digit , { digit } ;
//! ```
//!
//! There is no unary minus: `-1` is not a valid factor. Call argument lists
//! do not require commas between arguments and accept a trailing one.
//!
//! Each `expression` counts one nesting level against the parser's depth
//! limit, which bounds the recursion through parentheses and call arguments.

use crate::parser::classify::{is_alnum, is_digit, is_letter};
use crate::parser::errors::{ErrorKind, SyntaxError};
use crate::parser::parse::Parser;

impl<'src> Parser<'src> {
    /// Parse expression (additive level)
    pub(crate) fn parse_expression(&mut self) -> Result<(), SyntaxError> {
        self.enter()?;
        self.parse_term()?;
        while self.scanner.at(b'+') || self.scanner.at(b'-') {
            self.scanner.bump();
            self.scanner.skip_whitespace_and_comments();
            self.parse_term()?;
        }
        self.leave();
        Ok(())
    }

    /// Parse term (multiplicative level)
    fn parse_term(&mut self) -> Result<(), SyntaxError> {
        self.parse_factor()?;
        while self.scanner.at(b'*') || self.scanner.at(b'/') {
            self.scanner.bump();
            self.scanner.skip_whitespace_and_comments();
            self.parse_factor()?;
        }
        Ok(())
    }

    fn parse_factor(&mut self) -> Result<(), SyntaxError> {
        if self.scanner.at(b'(') {
            self.scanner.expect(b'(')?;
            self.parse_expression()?;
            self.scanner.expect(b')')
        } else if self.scanner.peek().is_some_and(is_letter) {
            self.parse_identifier()?;
            if self.scanner.at(b'(') {
                self.parse_call_arguments()?;
            }
            Ok(())
        } else {
            self.parse_number().map(|_| ())
        }
    }

    /// Parse `"(" { expression [","] } ")"` after a callee name
    fn parse_call_arguments(&mut self) -> Result<(), SyntaxError> {
        self.scanner.expect(b'(')?;
        while !self.scanner.at(b')') {
            self.parse_expression()?;
            if self.scanner.at(b',') {
                self.scanner.expect(b',')?;
            }
        }
        self.scanner.expect(b')')
    }

    /// Parse an identifier and record its span as the current token
    pub(crate) fn parse_identifier(&mut self) -> Result<(), SyntaxError> {
        let start = self.scanner.position();
        match self.scanner.peek() {
            Some(b) if is_letter(b) || b == b'_' => self.scanner.bump(),
            _ => return Err(self.scanner.error(ErrorKind::InvalidIdentifier)),
        }
        while self.scanner.peek().is_some_and(|b| is_alnum(b) || b == b'_') {
            self.scanner.bump();
        }
        self.scanner.set_token(start);
        self.scanner.skip_whitespace_and_comments();
        Ok(())
    }

    /// Parse a decimal literal, record its span, and return its value.
    ///
    /// The value wraps on overflow.
    pub(crate) fn parse_number(&mut self) -> Result<i64, SyntaxError> {
        let start = self.scanner.position();
        if !self.scanner.peek().is_some_and(is_digit) {
            return Err(self.scanner.error(ErrorKind::InvalidNumber));
        }
        let mut value: i64 = 0;
        while let Some(digit) = self.scanner.peek().filter(|&b| is_digit(b)) {
            value = value.wrapping_mul(10).wrapping_add(i64::from(digit - b'0'));
            self.scanner.bump();
        }
        self.scanner.set_token(start);
        self.scanner.skip_whitespace_and_comments();
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::Limits;
    use crate::parser::errors::{ErrorKind, SyntaxError};
    use crate::parser::parse::Parser;

    fn parse(source: &str) -> Result<(), SyntaxError> {
        Parser::new(source.as_bytes()).parse_program()
    }

    #[test]
    fn test_precedence_levels() {
        assert!(parse("x = 1 + 2 * 3 - 4 / 5;").is_ok());
        assert!(parse("x = a*b+c*d-e/f;").is_ok());
    }

    #[test]
    fn test_parentheses_balance() {
        assert!(parse("x = ((((1))));").is_ok());
        assert!(parse("x = (1 + (2 * (3 - 4)));").is_ok());

        let err = parse("x = ((1);").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedCharacter { expected: ')' });

        let err = parse("x = (1));").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnexpectedCharacter { expected: ';' });
    }

    #[test]
    fn test_unary_minus_is_not_recognized() {
        let err = parse("x = -1;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidNumber);
        assert_eq!(err.snippet, "-1;");

        assert!(parse("x = 0 - 1;").is_ok());
    }

    #[test]
    fn test_dangling_operator() {
        let err = parse("x = 1 +;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidNumber);

        let err = parse("x = 2 * * 3;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidNumber);
    }

    #[test]
    fn test_calls_in_expressions() {
        assert!(parse("x = f();").is_ok());
        assert!(parse("x = f(1, g(2), h(a + b, (c)));").is_ok());
        assert!(parse("x = 1 + f(2) * 3;").is_ok());
    }

    #[test]
    fn test_permissive_call_arguments() {
        assert!(parse("x = f(1 2);").is_ok());
        assert!(parse("x = f(1,);").is_ok());

        let err = parse("x = f(,);").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidNumber);
    }

    #[test]
    fn test_unterminated_call() {
        let err = parse("x = f(1, 2").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidNumber);
        assert_eq!(err.snippet, "");
    }

    #[test]
    fn test_identifier_token() {
        let mut parser = Parser::new(b"abc_1 ");
        parser.parse_identifier().unwrap();
        assert_eq!(parser.token_text(), "abc_1");
        assert_eq!(parser.token().start, 0);
        assert_eq!(parser.token().len, 5);

        let mut parser = Parser::new(b"9a");
        let err = parser.parse_identifier().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidIdentifier);
    }

    #[test]
    fn test_number_value() {
        let mut parser = Parser::new(b"  0042 // c");
        assert_eq!(parser.parse_number().unwrap(), 42);
        assert_eq!(parser.token_text(), "0042");
        assert_eq!(parser.token().start, 2);
    }

    #[test]
    fn test_number_wraps_on_overflow() {
        let mut parser = Parser::new(b"99999999999999999999999");
        assert!(parser.parse_number().is_ok());
        assert!(parser.scanner.is_at_end());
    }

    #[test]
    fn test_call_arguments_count_toward_depth() {
        let limits = Limits::new(2);
        assert!(Parser::with_limits(b"x = f(1);", limits).parse_program().is_ok());

        let err = Parser::with_limits(b"x = f(g(1));", limits)
            .parse_program()
            .unwrap_err();
        assert!(err.is_limit());
    }
}
