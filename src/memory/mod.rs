//! Variable storage owned by the engine
//!
//! - [`value`]: the tagged [`Value`] and the [`Variable`] record
//! - [`symbols`]: the [`SymbolTable`] keyed by variable name
//!
//! The syntax checker only carries this storage around for an evaluation layer
//! built on top of it; no production touches it.

pub mod symbols;
pub mod value;

pub use symbols::SymbolTable;
pub use value::{Value, Variable};
