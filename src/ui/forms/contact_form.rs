//! Contact form rendering

use super::field_renderer::{draw_field, FIELD_BOX_HEIGHT, FIELD_WITH_ERROR_HEIGHT};
use crate::app::App;
use crate::state::forms::{FieldName, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the form: every input with its inline error, then the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Data Entry Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_WITH_ERROR_HEIGHT), // Email | Name
            Constraint::Length(FIELD_WITH_ERROR_HEIGHT), // Address
            Constraint::Length(FIELD_BOX_HEIGHT),        // Address 2
            Constraint::Length(FIELD_WITH_ERROR_HEIGHT), // City | Province | Postal Code
            Constraint::Length(FIELD_WITH_ERROR_HEIGHT), // Terms
            Constraint::Length(BUTTON_HEIGHT),           // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    let pair = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let triple = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[3]);

    let placements = [
        (FieldName::Email, pair[0]),
        (FieldName::FullName, pair[1]),
        (FieldName::Address1, rows[1]),
        (FieldName::Address2, rows[2]),
        (FieldName::City, triple[0]),
        (FieldName::Province, triple[1]),
        (FieldName::PostalCode, triple[2]),
        (FieldName::AgreeTerms, rows[4]),
    ];

    let focus = app.state.form.focus();
    for (field, field_area) in placements {
        draw_field(
            frame,
            field_area,
            field,
            app.state.values(),
            focus == Focus::Field(field),
            app.state.errors.get(field),
        );
    }

    let button_area = Rect {
        width: rows[5].width.min(14),
        ..rows[5]
    };
    render_button(
        frame,
        button_area,
        "Submit",
        focus == Focus::SubmitButton,
        Color::Green,
    );
}
