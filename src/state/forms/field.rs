//! Form field identities and presentation metadata

use std::fmt;
use std::str::FromStr;

use super::FormError;

/// What kind of input control backs a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Text,
    /// Single choice from the province list
    Select,
    Checkbox,
}

impl FieldKind {
    /// Whether the field accepts typed characters
    pub fn is_text_entry(&self) -> bool {
        matches!(self, FieldKind::Email | FieldKind::Text)
    }
}

/// The closed set of fields on the contact form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Email,
    FullName,
    Address1,
    Address2,
    City,
    Province,
    PostalCode,
    AgreeTerms,
}

impl FieldName {
    pub const ALL: [FieldName; 8] = [
        FieldName::Email,
        FieldName::FullName,
        FieldName::Address1,
        FieldName::Address2,
        FieldName::City,
        FieldName::Province,
        FieldName::PostalCode,
        FieldName::AgreeTerms,
    ];

    /// Wire name, matching the keys used in serialized values and error maps
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FullName => "fullName",
            Self::Address1 => "address1",
            Self::Address2 => "address2",
            Self::City => "city",
            Self::Province => "province",
            Self::PostalCode => "postalCode",
            Self::AgreeTerms => "agreeTerms",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Email => FieldKind::Email,
            Self::Province => FieldKind::Select,
            Self::AgreeTerms => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }

    /// Label shown on the input box
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::FullName => "Name",
            Self::Address1 => "Address",
            Self::Address2 => "Address 2",
            Self::City => "City",
            Self::Province => "Province",
            Self::PostalCode => "Postal Code",
            Self::AgreeTerms => "Agree Terms & Condition?",
        }
    }

    /// Hint rendered when the field is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => "Enter email",
            Self::FullName => "Full Name",
            Self::Address1 => "1234 Main St",
            Self::Address2 => "Apartment, studio, or floor",
            Self::City => "City",
            Self::Province => "Choose…",
            Self::PostalCode => "Postal Code",
            Self::AgreeTerms => "",
        }
    }

    /// Row label in the submitted summary
    pub fn summary_label(&self) -> &'static str {
        match self {
            Self::AgreeTerms => "Agreed Terms",
            other => other.label(),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
