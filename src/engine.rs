//! Engine: the long-lived handle that runs the syntax checker
//!
//! An [`Engine`] is created once and may check any number of source texts.
//! Each run starts from fresh scan state (offset 0, line 1) while the
//! [`SymbolTable`] persists across runs. Dropping the engine releases
//! everything it owns.
//!
//! A run is all-or-nothing: either the whole input is a valid program, or the
//! first syntax error is recorded and the run stops. `exec` takes `&mut self`,
//! so one engine can never have two runs in flight.

use crate::constants::Limits;
use crate::memory::SymbolTable;
use crate::parser::errors::{ErrorMessage, SyntaxError};
use crate::parser::parse::Parser;

/// Syntax-checking engine
#[derive(Debug, Default)]
pub struct Engine {
    symbols: SymbolTable,
    limits: Limits,
    line: usize,
    message: ErrorMessage,
    last_error: Option<SyntaxError>,
}

impl Engine {
    /// Create an engine with an empty symbol table and default limits
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits: Limits::new(limits.max_depth),
            ..Self::default()
        }
    }

    /// Check `source`, returning true if it is a valid program.
    ///
    /// On failure the diagnostic is available from [`Engine::error_message`]
    /// and [`Engine::last_error`].
    pub fn exec(&mut self, source: impl AsRef<[u8]>) -> bool {
        self.check(source).is_ok()
    }

    /// Check `source`, returning the first syntax error
    pub fn check(&mut self, source: impl AsRef<[u8]>) -> Result<(), SyntaxError> {
        let mut parser = Parser::with_limits(source.as_ref(), self.limits);
        let result = parser.parse_program();
        self.line = parser.line();

        match result {
            Ok(()) => {
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                self.record_failure(&err);
                Err(err)
            }
        }
    }

    fn record_failure(&mut self, err: &SyntaxError) {
        self.message.set(&err.message());
        self.last_error = Some(err.clone());

        #[cfg(feature = "trace")]
        eprintln!("ejs: {}", err);
    }

    /// Diagnostic text of the most recent failure: `[<snippet>]: <condition>`.
    ///
    /// Bounded to [`ErrorMessage::MAX_LEN`] bytes. A successful run leaves
    /// the previous text in place.
    pub fn error_message(&self) -> &str {
        self.message.as_str()
    }

    pub fn message_truncated(&self) -> bool {
        self.message.is_truncated()
    }

    /// Structured error of the most recent run, `None` if it succeeded
    pub fn last_error(&self) -> Option<&SyntaxError> {
        self.last_error.as_ref()
    }

    /// Line the scanner reached in the most recent run
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }
}
