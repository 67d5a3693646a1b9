//! Form rendering module
//!
//! - `field_renderer`: one input box plus its inline error line
//! - `contact_form`: the data-entry form layout
//! - `summary`: the read-only block for the last accepted submission

mod contact_form;
mod field_renderer;
mod summary;

pub use contact_form::draw as draw_contact_form;
pub use summary::{draw_summary, summary_text};
