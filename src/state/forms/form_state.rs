//! Form values and the focus model for the contact form

use super::error::FormError;
use super::field::{FieldKind, FieldName};
use super::province::{next_province, prev_province};

/// Trait for common form focus operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// A single edit coming from an input control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Raw text from a text, email or select control
    Text(String),
    /// Checkbox checked-state
    Checked(bool),
}

/// Current contents of every field on the form
///
/// Text is stored exactly as entered; nothing is trimmed on write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub email: String,
    pub full_name: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub agree_terms: bool,
}

impl FormValues {
    /// Text content of a field, or `None` for the checkbox
    pub fn text(&self, name: FieldName) -> Option<&str> {
        let value = match name {
            FieldName::Email => &self.email,
            FieldName::FullName => &self.full_name,
            FieldName::Address1 => &self.address1,
            FieldName::Address2 => &self.address2,
            FieldName::City => &self.city,
            FieldName::Province => &self.province,
            FieldName::PostalCode => &self.postal_code,
            FieldName::AgreeTerms => return None,
        };
        Some(value)
    }

    fn text_mut(&mut self, name: FieldName) -> Option<&mut String> {
        let value = match name {
            FieldName::Email => &mut self.email,
            FieldName::FullName => &mut self.full_name,
            FieldName::Address1 => &mut self.address1,
            FieldName::Address2 => &mut self.address2,
            FieldName::City => &mut self.city,
            FieldName::Province => &mut self.province,
            FieldName::PostalCode => &mut self.postal_code,
            FieldName::AgreeTerms => return None,
        };
        Some(value)
    }

    /// Return a new value record with one field replaced.
    ///
    /// The checkbox only accepts [`FieldEdit::Checked`]; every other field
    /// only accepts [`FieldEdit::Text`]. `self` is left untouched.
    pub fn with_field(&self, name: FieldName, edit: FieldEdit) -> Result<Self, FormError> {
        let mut next = self.clone();
        match (name.kind(), edit) {
            (FieldKind::Checkbox, FieldEdit::Checked(checked)) => next.agree_terms = checked,
            (FieldKind::Checkbox, FieldEdit::Text(_)) | (_, FieldEdit::Checked(_)) => {
                return Err(FormError::KindMismatch {
                    field: name,
                    expected: name.kind(),
                })
            }
            (_, FieldEdit::Text(text)) => {
                if let Some(slot) = next.text_mut(name) {
                    *slot = text;
                }
            }
        }
        Ok(next)
    }

    /// Like [`FormValues::with_field`], addressing the field by wire name
    pub fn set_field(&self, name: &str, edit: FieldEdit) -> Result<Self, FormError> {
        self.with_field(name.parse()?, edit)
    }
}

/// What currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    SubmitButton,
}

/// The contact form: values plus which control is focused
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub values: FormValues,
    pub active_field_index: usize,
}

impl ContactForm {
    /// Index of the submit button in the focus order
    pub const SUBMIT_INDEX: usize = FieldName::ALL.len();

    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Focus {
        FieldName::ALL
            .get(self.active_field_index)
            .map_or(Focus::SubmitButton, |name| Focus::Field(*name))
    }

    pub fn is_submit_focused(&self) -> bool {
        self.focus() == Focus::SubmitButton
    }

    /// Apply an edit to the given field, replacing the value record
    pub fn apply(&mut self, name: FieldName, edit: FieldEdit) -> Result<(), FormError> {
        self.values = self.values.with_field(name, edit)?;
        Ok(())
    }

    /// Append a typed character to the focused text field
    pub fn input_char(&mut self, c: char) {
        if let Focus::Field(name) = self.focus() {
            if let (true, Some(current)) = (name.kind().is_text_entry(), self.values.text(name)) {
                let mut text = current.to_string();
                text.push(c);
                self.replace_text(name, text);
            }
        }
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        if let Focus::Field(name) = self.focus() {
            if let (true, Some(current)) = (name.kind().is_text_entry(), self.values.text(name)) {
                let mut text = current.to_string();
                text.pop();
                self.replace_text(name, text);
            }
        }
    }

    /// Flip the checkbox if it is focused
    pub fn toggle_checkbox(&mut self) {
        if self.focus() == Focus::Field(FieldName::AgreeTerms) {
            self.values = FormValues {
                agree_terms: !self.values.agree_terms,
                ..self.values.clone()
            };
        }
    }

    /// Step the province select forward or backward if it is focused
    pub fn cycle_province(&mut self, forward: bool) {
        if self.focus() == Focus::Field(FieldName::Province) {
            let current = self.values.province.as_str();
            let next = if forward {
                next_province(current)
            } else {
                prev_province(current)
            };
            self.replace_text(FieldName::Province, next.to_string());
        }
    }

    /// Clear every value and focus the first field
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replace a text field's value; the checkbox has no text and is left alone
    fn replace_text(&mut self, name: FieldName, text: String) {
        let mut next = self.values.clone();
        if let Some(slot) = next.text_mut(name) {
            *slot = text;
            self.values = next;
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        FieldName::ALL.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
}
