//! Source scanner and grammar checker
//!
//! This module decides whether a source text is a syntactically valid program:
//! - [`classify`]: byte classes (letter, digit, delimiter, invalid)
//! - [`scanner`]: cursor, line tracking, whitespace/comment skipping, terminals
//! - [`parse`]: the [`Parser`] and its program entry point
//! - [`errors`]: [`SyntaxError`] and the bounded [`ErrorMessage`] buffer
//!
//! # Grammar
//!
//! ```text
//! program     = { statement } ;
//! statement   = declaration | assignment | expression , ";" ;
//! declaration = "var" , assignment , { "," , assignment } , ";" ;
//! assignment  = identifier , "=" , expression ;
//! expression  = term , { ("+" | "-") , term } ;
//! term        = factor , { ("*" | "/") , factor } ;
//! factor      = number
//!             | identifier , [ "(" , { expression , [","] } , ")" ]
//!             | "(" , expression , ")" ;
//! ```
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent straight over the bytes, with no token
//! stream and no syntax tree. Productions are split across `impl Parser`
//! blocks in `statements` and `expressions`.

pub mod classify;
pub mod errors;
mod expressions;
pub mod parse;
pub mod scanner;
mod statements;

pub use errors::{ErrorKind, ErrorMessage, SyntaxError};
pub use parse::Parser;
pub use scanner::{Scanner, Span};
