//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

pub use forms::summary_text;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, body_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    // The form is always shown; the summary joins it once something is accepted
    match app.state.submitted() {
        Some(snapshot) => {
            let (form_area, summary_area) = layout::split_body(body_area);
            forms::draw_contact_form(frame, form_area, app);
            forms::draw_summary(frame, summary_area, snapshot);
        }
        None => forms::draw_contact_form(frame, body_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
