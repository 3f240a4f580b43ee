//! Display formatting for terminal output
//!
//! Provides utilities for formatting budgets and flow graphs for terminal
//! display, including tables and proportional bars.

pub mod report;
pub mod summary;

pub use summary::{format_entry_table, format_flow_table, format_shape, format_totals};
