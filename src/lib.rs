//! Address Form - terminal data-entry form
//!
//! A Ratatui-based TUI that collects address and contact details,
//! validates them field by field and shows a read-only summary of the
//! last accepted submission.

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod ui;
