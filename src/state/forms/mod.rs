//! Form domain layer
//!
//! Typed field identities, the value record, the focus model and the
//! validation rules for the contact form.

mod error;
mod field;
mod form_state;
mod province;
mod validation;

pub use error::FormError;
pub use field::{FieldKind, FieldName};
pub use form_state::{ContactForm, FieldEdit, Focus, Form, FormValues};
pub use province::{is_known_province, next_province, prev_province, PROVINCES};
pub use validation::{validate, validate_with, ValidationErrors, ValidationOptions};
