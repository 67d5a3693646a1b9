//! Read-only summary of the last accepted submission

use crate::state::forms::{FieldName, FormValues};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const SUMMARY_TITLE: &str = "Submitted Information";

/// Label/value rows of the summary, in display order.
///
/// The Address 2 row is left out entirely when that field is empty.
pub fn summary_lines(snapshot: &FormValues) -> Vec<(&'static str, String)> {
    FieldName::ALL
        .into_iter()
        .filter_map(|field| {
            let value = match field {
                FieldName::AgreeTerms => yes_no(snapshot.agree_terms).to_string(),
                FieldName::Address2 if snapshot.address2.is_empty() => return None,
                other => snapshot.text(other).unwrap_or_default().to_string(),
            };
            Some((field.summary_label(), value))
        })
        .collect()
}

/// Plain-text rendering used for the clipboard
pub fn summary_text(snapshot: &FormValues) -> String {
    let mut out = format!("{SUMMARY_TITLE}\n");
    for (label, value) in summary_lines(snapshot) {
        out.push_str(&format!("{label}: {value}\n"));
    }
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Draw the summary block
pub fn draw_summary(frame: &mut Frame, area: Rect, snapshot: &FormValues) {
    let key_style = Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = summary_lines(snapshot)
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), key_style),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        })
        .collect();

    let block = Block::default()
        .title(format!(" {SUMMARY_TITLE} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn snapshot() -> FormValues {
        FormValues {
            email: "a@b.com".into(),
            full_name: "Jane Doe".into(),
            address1: "1 Main St".into(),
            address2: String::new(),
            city: "Town".into(),
            province: "Ontario".into(),
            postal_code: "A1A1A1".into(),
            agree_terms: true,
        }
    }

    #[test]
    fn test_rows_without_address2() {
        let rows = summary_lines(&snapshot());
        let labels: Vec<_> = rows.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec![
                "Email",
                "Name",
                "Address",
                "City",
                "Province",
                "Postal Code",
                "Agreed Terms"
            ]
        );
        assert_eq!(rows[6], ("Agreed Terms", "Yes".to_string()));
    }

    #[test]
    fn test_address2_row_present_when_filled() {
        let values = FormValues {
            address2: "Unit 4".into(),
            ..snapshot()
        };
        let rows = summary_lines(&values);
        assert_eq!(rows[3], ("Address 2", "Unit 4".to_string()));
        assert_eq!(rows.len(), 8);
    }

    #[test]
    fn test_terms_rendered_as_no() {
        let values = FormValues {
            agree_terms: false,
            ..snapshot()
        };
        let rows = summary_lines(&values);
        assert_eq!(rows.last(), Some(&("Agreed Terms", "No".to_string())));
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(
            summary_text(&snapshot()),
            "Submitted Information\n\
             Email: a@b.com\n\
             Name: Jane Doe\n\
             Address: 1 Main St\n\
             City: Town\n\
             Province: Ontario\n\
             Postal Code: A1A1A1\n\
             Agreed Terms: Yes\n"
        );
    }
}
