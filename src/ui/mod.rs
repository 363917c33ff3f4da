//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — viewer state and keyboard event loop
//! - **[`panes`]** — stateless render functions for the source pane, the
//!   diagnostic pane and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! Construct an [`App`] from an [`Engine`] right after a check and call
//! [`App::run`] to start the event loop.
//!
//! [`Engine`]: crate::engine::Engine
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
