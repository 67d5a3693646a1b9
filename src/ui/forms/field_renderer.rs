//! Field rendering utilities for forms

use crate::state::forms::{FieldKind, FieldName, FormValues};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Rows taken by an input box (top border + content + bottom border)
pub const FIELD_BOX_HEIGHT: u16 = 3;

/// Rows taken by a field that can show an inline error beneath its box
pub const FIELD_WITH_ERROR_HEIGHT: u16 = FIELD_BOX_HEIGHT + 1;

/// Draw one input box bound to its current value, with the field's
/// validation message (if any) on the row directly beneath it.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    values: &FormValues,
    is_active: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_BOX_HEIGHT), Constraint::Min(0)])
        .split(area);

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style);

    // Inside the left and right borders
    let inner_width = usize::from(chunks[0].width.saturating_sub(2));
    let content = field_content(field, values, is_active, inner_width);
    frame.render_widget(Paragraph::new(content).block(block), chunks[0]);

    if let Some(message) = error {
        let line = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, chunks[1]);
    }
}

/// Longest suffix of `text` that fits in `width` columns
fn visible_tail(text: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

/// Build the single line shown inside a field's box.
///
/// While a text field is being edited only the tail that fits next to the
/// cursor is shown, so the typing position stays in view.
fn field_content<'a>(
    field: FieldName,
    values: &'a FormValues,
    is_active: bool,
    width: usize,
) -> Line<'a> {
    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let hint_style = Style::default().fg(Color::DarkGray);

    match field.kind() {
        FieldKind::Email | FieldKind::Text => {
            let text = values.text(field).unwrap_or_default();
            let mut spans = Vec::new();
            if text.is_empty() && !is_active {
                spans.push(Span::styled(field.placeholder(), hint_style));
            } else if is_active {
                let tail = visible_tail(text, width.saturating_sub(1));
                spans.push(Span::styled(tail, value_style));
            } else {
                spans.push(Span::styled(text, value_style));
            }
            if is_active {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        }
        FieldKind::Select => {
            let text = values.text(field).unwrap_or_default();
            let shown = if text.is_empty() {
                Span::styled(field.placeholder(), hint_style)
            } else {
                Span::styled(text, value_style)
            };
            let arrow = if is_active { value_style } else { hint_style };
            Line::from(vec![
                Span::styled("◀ ", arrow),
                shown,
                Span::styled(" ▶", arrow),
            ])
        }
        FieldKind::Checkbox => {
            let mark = if values.agree_terms { "[x]" } else { "[ ]" };
            Line::from(vec![
                Span::styled(mark, value_style.add_modifier(Modifier::BOLD)),
                Span::raw(" "),
                Span::styled(field.label(), value_style),
            ])
        }
    }
}
