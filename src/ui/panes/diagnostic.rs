//! Diagnostic pane: outcome of the check and error details

use crate::parser::errors::{ErrorKind, SyntaxError};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the diagnostic pane
pub struct DiagnosticRenderData<'a> {
    pub file_name: &'a str,
    pub error: Option<&'a SyntaxError>,
    /// Bounded message as stored on the engine
    pub message: &'a str,
    pub truncated: bool,
}

fn kind_label(kind: &ErrorKind) -> &'static str {
    match kind {
        ErrorKind::UnexpectedCharacter { .. } => "unexpected character",
        ErrorKind::InvalidIdentifier => "invalid identifier",
        ErrorKind::InvalidNumber => "invalid number",
        ErrorKind::NestingTooDeep { .. } => "nesting limit",
    }
}

pub(crate) fn diagnostic_lines<'a>(data: &DiagnosticRenderData<'a>) -> Vec<Line<'a>> {
    let label = Style::default().fg(DEFAULT_THEME.comment);
    let mut lines = vec![Line::from(vec![
        Span::styled("File:     ", label),
        Span::raw(data.file_name),
    ])];

    match data.error {
        None => lines.push(Line::from(Span::styled(
            "Syntax OK",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ))),
        Some(err) => {
            lines.push(Line::from(vec![
                Span::styled("Error:    ", label),
                Span::styled(
                    kind_label(&err.kind),
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Position: ", label),
                Span::raw(format!(
                    "line {}, column {} (offset {})",
                    err.line, err.column, err.offset
                )),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Near:     ", label),
                Span::styled(
                    format!("{:?}", err.snippet),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ),
            ]));
            let mut message = vec![
                Span::styled("Message:  ", label),
                Span::raw(data.message),
            ];
            if data.truncated {
                message.push(Span::styled(" (truncated)", label));
            }
            lines.push(Line::from(message));
        }
    }

    lines
}

pub fn render_diagnostic_pane(
    frame: &mut Frame,
    area: Rect,
    data: &DiagnosticRenderData<'_>,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Diagnostic ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(diagnostic_lines(data))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
