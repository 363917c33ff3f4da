//! TUI pane rendering modules
//!
//! - [`source`]: source code with highlighting and the failing line marked
//! - [`diagnostic`]: outcome of the check and error details
//! - [`status`]: status bar with keybindings
//!
//! Each pane module exports a `render_*` function that draws from borrowed
//! state and keeps nothing between frames except explicit scroll state.

pub mod diagnostic;
pub mod source;
pub mod status;

pub use diagnostic::{render_diagnostic_pane, DiagnosticRenderData};
pub use source::{render_source_pane, SourceScrollState};
pub use status::render_status_bar;
