//! Source code pane rendering with syntax highlighting
//!
//! Displays the checked program with line numbers and simple highlighting.
//! When the check failed, the failing line is drawn on a red background and
//! followed by a caret row pointing at the failing column.

use crate::parser::errors::SyntaxError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the line number gutter, trailing space included
const GUTTER_WIDTH: usize = 5;

/// Simple syntax highlighting for one source line
pub(crate) fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Comments run to the end of the line
        if c == '/' && i + 1 < chars.len() && chars[i + 1] == '/' {
            if !current_word.is_empty() {
                spans.push(Span::styled(
                    current_word.clone(),
                    get_word_style(&current_word, false),
                ));
                current_word.clear();
            }
            let rest: String = chars[i..].iter().collect();
            spans.push(Span::styled(rest, Style::default().fg(DEFAULT_THEME.comment)));
            break;
        }

        if !c.is_ascii_alphanumeric() && c != '_' {
            if !current_word.is_empty() {
                let style = get_word_style(&current_word, c == '(');
                spans.push(Span::styled(current_word.clone(), style));
                current_word.clear();
            }

            let style = match c {
                '(' | ')' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = get_word_style(&current_word, false);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_word_style(word: &str, is_function: bool) -> Style {
    if word == "var" {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.starts_with(|c: char| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else if is_function {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

/// Row shown under the failing line: a caret at `column` (1-based)
pub(crate) fn caret_row(column: usize, condition: &str) -> String {
    format!(
        "{}{}^ {}",
        " ".repeat(GUTTER_WIDTH),
        " ".repeat(column.saturating_sub(1)),
        condition
    )
}

/// Scroll state for the source pane
#[derive(Debug, Clone, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    /// Center the failing line on the next render
    pub follow_error: bool,
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    error: Option<&SyntaxError>,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let error_line = error.map(|e| e.line);
    let mut rows: Vec<Line> = Vec::new();

    for (idx, line) in source_code.lines().enumerate() {
        let line_num = idx + 1;
        let line_num_str = format!("{:4} ", line_num);

        if error_line == Some(line_num) {
            let mut content = highlight_source_code(line);
            for span in &mut content.spans {
                span.style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
            }
            let mut spans = vec![Span::styled(
                line_num_str,
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD),
            )];
            spans.extend(content.spans);
            rows.push(Line::from(spans));

            if let Some(err) = error {
                rows.push(Line::from(Span::styled(
                    caret_row(err.column, &err.kind.condition()),
                    Style::default().fg(DEFAULT_THEME.error),
                )));
            }
        } else {
            let mut spans = vec![Span::styled(
                line_num_str,
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_source_code(line).spans);
            rows.push(Line::from(spans));
        }
    }

    // An error at end of input may sit past the last line
    if let Some(err) = error {
        if err.line > source_code.lines().count() {
            rows.push(Line::from(Span::styled(
                format!("{:4} ", err.line),
                Style::default().fg(DEFAULT_THEME.error),
            )));
            rows.push(Line::from(Span::styled(
                caret_row(err.column, &err.kind.condition()),
                Style::default().fg(DEFAULT_THEME.error),
            )));
        }
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = rows.len().saturating_sub(visible_height);

    if scroll_state.follow_error {
        if let Some(line) = error_line {
            scroll_state.offset = line.saturating_sub(1).saturating_sub(visible_height / 2);
        }
        scroll_state.follow_error = false;
    }
    scroll_state.offset = scroll_state.offset.min(max_scroll);

    let visible_rows: Vec<Line> = rows
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(visible_rows).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_keyword_and_comment() {
        let line = highlight_source_code("var x = f(1); // note");
        let first = &line.spans[0];
        assert_eq!(first.content, "var");
        assert_eq!(first.style.fg, Some(DEFAULT_THEME.keyword));

        let callee = line.spans.iter().find(|s| s.content == "f").unwrap();
        assert_eq!(callee.style.fg, Some(DEFAULT_THEME.function));

        let number = line.spans.iter().find(|s| s.content == "1").unwrap();
        assert_eq!(number.style.fg, Some(DEFAULT_THEME.number));

        let last = line.spans.last().unwrap();
        assert_eq!(last.content, "// note");
        assert_eq!(last.style.fg, Some(DEFAULT_THEME.comment));
    }

    #[test]
    fn test_caret_row() {
        assert_eq!(caret_row(1, "expected ';'"), "     ^ expected ';'");
        assert_eq!(caret_row(3, "expected digit"), "       ^ expected digit");
    }
}
