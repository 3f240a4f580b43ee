//! Dialog modules for the TUI
//!
//! Contains modal dialogs for editing rows and the chart appearance

pub mod appearance;
pub mod confirm;
pub mod entry;
pub mod help;
