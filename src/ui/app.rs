//! Viewer application state and event loop

use crate::engine::Engine;
use crate::parser::errors::SyntaxError;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

use super::panes::{DiagnosticRenderData, SourceScrollState};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Diagnostic,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostic,
            FocusedPane::Diagnostic => FocusedPane::Source,
        }
    }
}

/// The viewer state for one checked file
pub struct App {
    pub file_name: String,

    /// Source shown in the source pane (lossy UTF-8)
    pub source_code: String,

    /// Error of the check, `None` if the file is valid
    pub error: Option<SyntaxError>,

    /// Bounded message as stored on the engine
    pub message: String,
    pub truncated: bool,

    pub focused_pane: FocusedPane,
    pub source_scroll: SourceScrollState,
    pub should_quit: bool,
    pub status_message: String,
}

impl App {
    /// Create the viewer from an engine that has just checked `source_code`
    pub fn new(file_name: String, source_code: String, engine: &Engine) -> Self {
        let error = engine.last_error().cloned();
        let status_message = match &error {
            Some(err) => format!("line {}: {}", err.line, err.kind.condition()),
            None => "Syntax OK".to_string(),
        };
        App {
            file_name,
            source_code,
            message: engine.error_message().to_string(),
            truncated: engine.message_truncated(),
            source_scroll: SourceScrollState {
                offset: 0,
                follow_error: error.is_some(),
            },
            error,
            focused_pane: FocusedPane::Source,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let panes = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(main_chunks[0]);

        super::panes::render_source_pane(
            frame,
            panes[0],
            &self.source_code,
            self.error.as_ref(),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        let data = DiagnosticRenderData {
            file_name: &self.file_name,
            error: self.error.as_ref(),
            message: &self.message,
            truncated: self.truncated,
        };
        super::panes::render_diagnostic_pane(
            frame,
            panes[1],
            &data,
            self.focused_pane == FocusedPane::Diagnostic,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.error.is_some(),
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => {
                self.source_scroll.offset = self.source_scroll.offset.saturating_sub(1);
            }
            KeyCode::Down => {
                // Clamped against the pane height on the next render
                self.source_scroll.offset = self.source_scroll.offset.saturating_add(1);
            }
            KeyCode::PageUp => {
                self.source_scroll.offset = self.source_scroll.offset.saturating_sub(10);
            }
            KeyCode::PageDown => {
                self.source_scroll.offset = self.source_scroll.offset.saturating_add(10);
            }
            KeyCode::Home => {
                self.source_scroll.offset = 0;
            }
            KeyCode::Char('g') => {
                if let Some(err) = &self.error {
                    self.source_scroll.follow_error = true;
                    self.status_message = format!("Jumped to line {}", err.line);
                }
            }
            _ => {}
        }
    }
}
