//! # Introduction
//!
//! ejs is the front end of a minimal embeddable scripting language. It scans a
//! source text and decides whether it is a syntactically valid program,
//! reporting the first violation. Nothing is evaluated and no syntax tree is
//! kept.
//!
//! ## Pipeline
//!
//! ```text
//! Source bytes → Scanner → recursive descent → Ok / SyntaxError → Engine
//! ```
//!
//! 1. [`parser`] — byte classes, the scanner, and the grammar productions.
//! 2. [`engine`] — the long-lived [`Engine`] handle: runs checks, keeps the
//!    last diagnostic and owns the symbol table.
//! 3. [`memory`] — [`memory::Value`], [`memory::Variable`] and the
//!    [`memory::SymbolTable`] handed to a later evaluation layer.
//! 4. [`constants`] — limits and buffer sizes.
//! 5. [`ui`] — ratatui-based viewer used by the `ejs` binary; not part of the
//!    stable library API.
//!
//! ## Example
//!
//! ```
//! use ejs::Engine;
//!
//! let mut engine = Engine::new();
//! assert!(engine.exec("var a = 1, b = a + 2;"));
//! assert!(!engine.exec("var x = ;"));
//! assert_eq!(engine.error_message(), "[;]: expected digit");
//! ```

pub mod constants;
pub mod engine;
pub mod memory;
pub mod parser;
pub mod ui;

pub use constants::Limits;
pub use engine::Engine;
pub use parser::{ErrorKind, SyntaxError};
