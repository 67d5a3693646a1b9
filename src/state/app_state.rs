//! Application state definitions

use std::collections::VecDeque;

use super::forms::{validate_with, ContactForm, FormValues, ValidationErrors, ValidationOptions};

/// Where the session is in its edit/submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    /// At least one submit has been accepted; the form stays editable
    Submitted,
}

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { failing_fields: usize },
}

/// Session behaviour switches, normally taken from the user config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub validation: ValidationOptions,
    /// Clear the form after an accepted submit
    pub reset_after_submit: bool,
}

/// All state of one form session
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub form: ContactForm,
    pub errors: ValidationErrors,
    /// Values captured at the last accepted submit
    submitted: Option<FormValues>,
    pub options: SessionOptions,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Non-fatal errors waiting to be shown in the error dialog
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.form.values
    }

    pub fn submitted(&self) -> Option<&FormValues> {
        self.submitted.as_ref()
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitted.is_some() {
            FormPhase::Submitted
        } else {
            FormPhase::Editing
        }
    }

    /// Validate the current values and either accept them as the new
    /// snapshot or replace the error set.
    ///
    /// A rejected submit keeps any earlier snapshot in place.
    pub fn submit(&mut self) -> SubmitOutcome {
        let errors = validate_with(&self.form.values, &self.options.validation);

        if errors.is_empty() {
            self.submitted = Some(self.form.values.clone());
            self.errors = ValidationErrors::default();
            if self.options.reset_after_submit {
                self.form.reset();
            }
            tracing::info!("Form submitted");
            self.status_message = Some("Submitted.".to_string());
            SubmitOutcome::Accepted
        } else {
            let failing_fields = errors.len();
            let failing: Vec<&str> = errors.fields().map(|f| f.as_str()).collect();
            tracing::debug!(fields = ?failing, "Submit rejected");
            self.errors = errors;
            self.status_message = Some(format!("{failing_fields} field(s) need attention."));
            SubmitOutcome::Rejected { failing_fields }
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!("{message}");
        self.error_queue.push_back(message);
    }

    /// Error currently shown in the dialog, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}
