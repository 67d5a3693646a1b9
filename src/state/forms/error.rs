//! Errors raised by the form domain layer

use thiserror::Error;

use super::field::{FieldKind, FieldName};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown form field `{0}`")]
    UnknownField(String),

    #[error("field `{field}` is a {expected:?} input and cannot take this edit")]
    KindMismatch {
        field: FieldName,
        expected: FieldKind,
    },
}
