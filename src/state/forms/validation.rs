//! Field-level validation rules for the contact form

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use super::field::FieldName;
use super::form_state::FormValues;
use super::province::is_known_province;

/// One non-blank char: anything outside Unicode White_Space and U+FEFF,
/// plus U+0085, which web forms do not treat as whitespace.
const NON_BLANK: &str = r"[[^\s\x{FEFF}]\x{85}]";

/// Something, `@`, something, `.`, something; no whitespace anywhere.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{NON_BLANK}+@{NON_BLANK}+\.{NON_BLANK}+$"))
        .expect("email pattern compiles")
});

/// Optional tightening of the default rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Reject a province that is not one of the listed names
    pub strict_province: bool,
}

/// Failing fields and their messages. A field is valid iff it is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<FieldName, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    /// Failing fields in form order
    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn insert(&mut self, field: FieldName, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

impl<const N: usize> From<[(FieldName, &str); N]> for ValidationErrors {
    fn from(entries: [(FieldName, &str); N]) -> Self {
        let mut errors = Self::default();
        for (field, message) in entries {
            errors.insert(field, message);
        }
        errors
    }
}

/// Whitespace as browsers trim it: Unicode White_Space without U+0085,
/// plus the byte-order mark U+FEFF.
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}

/// Validate with the default rule set
pub fn validate(values: &FormValues) -> ValidationErrors {
    validate_with(values, &ValidationOptions::default())
}

/// Check every rule against `values`.
///
/// All fields are evaluated on every call; the result is rebuilt from
/// scratch and never merged with earlier results.
pub fn validate_with(values: &FormValues, options: &ValidationOptions) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if is_blank(&values.email) {
        errors.insert(FieldName::Email, "Email is required.");
    } else if !EMAIL_PATTERN.is_match(&values.email) {
        errors.insert(FieldName::Email, "Enter a valid email.");
    }

    let required = [
        (FieldName::FullName, &values.full_name, "Full Name is required."),
        (FieldName::Address1, &values.address1, "Address is required."),
        (FieldName::City, &values.city, "City is required."),
        (FieldName::Province, &values.province, "Province is required."),
        (FieldName::PostalCode, &values.postal_code, "Postal Code is required."),
    ];
    for (field, value, message) in required {
        if is_blank(value) {
            errors.insert(field, message);
        }
    }

    if options.strict_province
        && !is_blank(&values.province)
        && !is_known_province(&values.province)
    {
        errors.insert(FieldName::Province, "Select a valid province.");
    }

    if !values.agree_terms {
        errors.insert(FieldName::AgreeTerms, "You must agree to the terms.");
    }

    errors
}
