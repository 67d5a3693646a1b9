//! Layout components (header, body, status bar)

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::forms::{FieldKind, Focus};
use crate::state::FormPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the summary column beside the form
pub const SUMMARY_WIDTH: u16 = 42;

/// Split the screen into header, body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split the body into form and summary columns
pub fn split_body(body: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(SUMMARY_WIDTH)])
        .split(body);

    (chunks[0], chunks[1])
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let phase = match app.state.phase() {
        FormPhase::Editing => Span::styled("editing", Style::default().fg(Color::Yellow)),
        FormPhase::Submitted => Span::styled("submitted", Style::default().fg(Color::Green)),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " Data Entry Form ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("· "),
        phase,
    ]));
    frame.render_widget(header, area);
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if app.show_help {
        spans.push(Span::styled(
            format!(" {}", get_focus_hints(app.state.form.focus())),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &app.state.status_message {
        let color = if app.state.errors.is_empty() {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for whatever currently has focus
fn get_focus_hints(focus: Focus) -> String {
    let common = format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {COPY_SHORTCUT}:copy  Esc Esc:quit");
    match focus {
        Focus::SubmitButton => format!("Enter:submit  {common}"),
        Focus::Field(name) => match name.kind() {
            FieldKind::Select => format!("←/→:choose  {common}"),
            FieldKind::Checkbox => format!("Space:toggle  {common}"),
            FieldKind::Email | FieldKind::Text => common,
        },
    }
}
