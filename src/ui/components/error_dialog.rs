//! Error dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const DIALOG_WIDTH: u16 = 56;

/// Render an error overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str) {
    let area = frame.area();
    let inner_width = DIALOG_WIDTH.saturating_sub(4).max(1) as usize;

    // Rough wrapped height: one row per `inner_width` chars of each line
    let message_rows = error_message
        .lines()
        .map(|l| {
            let rows = l.chars().count().max(1).div_ceil(inner_width);
            u16::try_from(rows).unwrap_or(u16::MAX)
        })
        .fold(0u16, u16::saturating_add)
        .max(1);
    // borders + blank + message + blank + hint
    let height = message_rows.saturating_add(5).min(area.height);
    let width = DIALOG_WIDTH.min(area.width);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut content = vec![Line::from("")];
    content.extend(error_message.lines().map(|l| Line::from(l.to_string())));
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]));

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    " Error ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Clear, dialog_area);
    frame.render_widget(dialog, dialog_area);
}
