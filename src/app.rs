//! Application state and key handling

use crate::config::TuiConfig;
use crate::state::forms::{FieldName, Focus, Form};
use crate::state::AppState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current form session
    pub state: AppState,
    /// Whether the status bar shows key hints
    pub show_help: bool,
    /// Whether the app should quit
    quit: bool,
    /// Set by a first Esc or Ctrl+C; the next one quits
    quit_armed: bool,
}

impl App {
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::new(config.session_options()),
            show_help: config.show_help(),
            quit: false,
            quit_armed: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether one more Esc or Ctrl+C will quit
    pub fn quit_pending(&self) -> bool {
        self.quit_armed
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // The error dialog swallows input until dismissed
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if is_quit_key(&key) {
            if self.quit_armed {
                self.quit = true;
            } else {
                self.quit_armed = true;
                self.state.status_message = Some("Press Esc again to quit.".to_string());
            }
            return Ok(());
        }
        if self.quit_armed {
            self.quit_armed = false;
            self.state.status_message = None;
        }

        let focus = self.state.form.focus();
        let ctrl = is_ctrl_chord(key.modifiers);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => {
                self.state.submit();
            }
            KeyCode::Char('y') if is_copy_chord(key.modifiers) => {
                self.copy_summary();
            }
            KeyCode::Enter if focus == Focus::SubmitButton => {
                self.state.submit();
            }
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Left if focus == Focus::Field(FieldName::Province) => {
                self.state.form.cycle_province(false);
            }
            KeyCode::Right | KeyCode::Char(' ') if focus == Focus::Field(FieldName::Province) => {
                self.state.form.cycle_province(true);
            }
            KeyCode::Char(' ') if focus == Focus::Field(FieldName::AgreeTerms) => {
                self.state.form.toggle_checkbox();
            }
            KeyCode::Char(' ') if focus == Focus::SubmitButton => {
                self.state.submit();
            }
            KeyCode::Char(c) if is_typed_char(key.modifiers) => {
                self.state.form.input_char(c);
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Copy the submitted summary to the system clipboard
    fn copy_summary(&mut self) {
        let Some(snapshot) = self.state.submitted() else {
            self.state.status_message = Some("Nothing submitted yet.".to_string());
            return;
        };
        let text = crate::ui::summary_text(snapshot);
        match copy_to_clipboard(&text) {
            Ok(()) => {
                tracing::info!("Summary copied to clipboard");
                self.state.status_message = Some("Summary copied.".to_string());
            }
            Err(err) => self
                .state
                .push_error(format!("Could not copy summary: {err}")),
        }
    }
}

/// AltGr arrives as Ctrl+Alt on Windows
fn is_alt_gr(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// Plain Ctrl chord, not AltGr
fn is_ctrl_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !is_alt_gr(modifiers)
}

fn is_copy_chord(modifiers: KeyModifiers) -> bool {
    modifiers.contains(crate::platform::COPY_MODIFIER) && !is_alt_gr(modifiers)
}

fn is_typed_char(modifiers: KeyModifiers) -> bool {
    if is_alt_gr(modifiers) {
        return !modifiers.contains(KeyModifiers::SUPER);
    }
    !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => is_ctrl_chord(key.modifiers),
        _ => false,
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FormValues;
    use crate::state::FormPhase;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    /// Fill the whole form through the keyboard, leaving focus on Submit
    fn fill_valid_form(app: &mut App) {
        type_text(app, "a@b.com");
        press(app, KeyCode::Tab);
        type_text(app, "Jane Doe");
        press(app, KeyCode::Tab);
        type_text(app, "1 Main St");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Tab); // skip Address 2
        type_text(app, "Town");
        press(app, KeyCode::Tab);
        for _ in 0..7 {
            press(app, KeyCode::Right); // Alberta .. Ontario
        }
        press(app, KeyCode::Tab);
        type_text(app, "A1A1A1");
        press(app, KeyCode::Tab);
        press(app, KeyCode::Char(' '));
        press(app, KeyCode::Tab);
    }

    fn expected_values() -> FormValues {
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
    fn test_should_quit_initially_false() {
        let app = App::new(&TuiConfig::default());
        assert!(!app.should_quit());
    }

    mod quit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_single_escape_only_arms_quit() {
            let mut app = App::new(&TuiConfig::default());
            press(&mut app, KeyCode::Esc);
            assert!(!app.should_quit());
            assert!(app.quit_pending());
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Press Esc again to quit.")
            );
        }

        #[test]
        fn test_double_escape_quits() {
            let mut app = App::new(&TuiConfig::default());
            press(&mut app, KeyCode::Esc);
            press(&mut app, KeyCode::Esc);
            assert!(app.should_quit());
        }

        #[test]
        fn test_double_ctrl_c_quits() {
            let mut app = App::new(&TuiConfig::default());
            press_ctrl(&mut app, 'c');
            assert!(!app.should_quit());
            press_ctrl(&mut app, 'c');
            assert!(app.should_quit());
        }

        #[test]
        fn test_esc_then_ctrl_c_quits() {
            let mut app = App::new(&TuiConfig::default());
            press(&mut app, KeyCode::Esc);
            press_ctrl(&mut app, 'c');
            assert!(app.should_quit());
        }

        #[test]
        fn test_other_key_disarms_quit() {
            let mut app = App::new(&TuiConfig::default());
            press(&mut app, KeyCode::Esc);
            type_text(&mut app, "a");
            assert!(!app.quit_pending());
            assert!(app.state.status_message.is_none());
            press(&mut app, KeyCode::Esc);
            assert!(!app.should_quit());
            assert_eq!(app.state.values().email, "a");
        }

        #[test]
        fn test_c_with_alt_gr_is_typed_not_quit() {
            let mut app = App::new(&TuiConfig::default());
            app.handle_key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL | KeyModifiers::ALT,
            ))
            .unwrap();
            assert!(!app.quit_pending());
            assert_eq!(app.state.values().email, "c");
        }
    }

    mod enter {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_enter_on_field_moves_focus_without_submitting() {
            let mut app = App::new(&TuiConfig::default());
            type_text(&mut app, "a@b.com");
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.focus(), Focus::Field(FieldName::FullName));
            assert!(app.state.errors.is_empty());
            assert!(app.state.status_message.is_none());
            assert_eq!(app.state.phase(), FormPhase::Editing);
        }

        #[test]
        fn test_enter_on_filled_field_does_not_submit() {
            let mut app = App::new(&TuiConfig::default());
            fill_valid_form(&mut app);
            press(&mut app, KeyCode::Tab); // wraps to email
            press(&mut app, KeyCode::Enter);
            assert!(app.state.submitted().is_none());
        }

        #[test]
        fn test_enter_on_checkbox_does_not_toggle() {
            let mut app = App::new(&TuiConfig::default());
            app.state.form.set_active_field(7);
            press(&mut app, KeyCode::Enter);
            assert!(!app.state.values().agree_terms);
            assert!(app.state.form.is_submit_focused());
        }
    }

    #[test]
    fn test_keyboard_fill_matches_expected_values() {
        let mut app = App::new(&TuiConfig::default());
        fill_valid_form(&mut app);
        assert_eq!(app.state.values(), &expected_values());
        assert!(app.state.form.is_submit_focused());
    }

    #[test]
    fn test_enter_on_submit_accepts_valid_form() {
        let mut app = App::new(&TuiConfig::default());
        fill_valid_form(&mut app);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state.phase(), FormPhase::Submitted);
        assert_eq!(app.state.submitted(), Some(&expected_values()));
        assert!(app.state.errors.is_empty());
    }

    #[test]
    fn test_ctrl_s_submits_from_any_field() {
        let mut app = App::new(&TuiConfig::default());
        press_ctrl(&mut app, 's');
        assert_eq!(app.state.errors.len(), 7);
        assert_eq!(app.state.values().email, "");
    }

    #[test]
    fn test_ctrl_chars_are_not_typed() {
        let mut app = App::new(&TuiConfig::default());
        press_ctrl(&mut app, 'q');
        assert_eq!(app.state.values().email, "");
    }

    #[test]
    fn test_alt_gr_chars_are_typed() {
        let mut app = App::new(&TuiConfig::default());
        type_text(&mut app, "a");
        app.handle_key(KeyEvent::new(
            KeyCode::Char('@'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        ))
        .unwrap();
        type_text(&mut app, "b.com");
        assert_eq!(app.state.values().email, "a@b.com");
        press_ctrl(&mut app, 's');
        assert!(!app.state.errors.contains(FieldName::Email));
    }

    #[test]
    fn test_alt_gr_s_is_typed_not_submitted() {
        let mut app = App::new(&TuiConfig::default());
        app.handle_key(KeyEvent::new(
            KeyCode::Char('s'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        ))
        .unwrap();
        assert_eq!(app.state.values().email, "s");
        assert!(app.state.errors.is_empty());
    }

    #[test]
    fn test_plain_alt_chars_are_not_typed() {
        let mut app = App::new(&TuiConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT))
            .unwrap();
        assert_eq!(app.state.values().email, "");
    }

    #[test]
    fn test_space_is_typed_in_text_fields() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "A B");
        assert_eq!(app.state.values().full_name, "A B");
    }

    #[test]
    fn test_editing_after_submit_keeps_summary() {
        let mut app = App::new(&TuiConfig::default());
        fill_valid_form(&mut app);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Tab); // back to email
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.state.values().email, "a@b.co");
        assert_eq!(app.state.submitted().unwrap().email, "a@b.com");
    }

    #[test]
    fn test_copy_without_submission_sets_status() {
        let mut app = App::new(&TuiConfig::default());
        press_ctrl(&mut app, 'y');
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("Nothing submitted yet.")
        );
        assert!(app.state.current_error().is_none());
    }

    #[test]
    fn test_error_dialog_blocks_input_until_dismissed() {
        let mut app = App::new(&TuiConfig::default());
        app.state.push_error("boom".into());
        type_text(&mut app, "abc");
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit());
        assert_eq!(app.state.values().email, "");
        assert!(app.state.current_error().is_none());
        type_text(&mut app, "abc");
        assert_eq!(app.state.values().email, "abc");
    }

    #[test]
    fn test_up_down_move_focus() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, KeyCode::Down);
        assert_eq!(app.state.form.focus(), Focus::Field(FieldName::FullName));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        assert!(app.state.form.is_submit_focused());
    }

    #[test]
    fn test_show_help_from_config() {
        let config = TuiConfig {
            show_help: Some(false),
            ..Default::default()
        };
        assert!(!App::new(&config).show_help);
    }
}
