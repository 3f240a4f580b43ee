//! Core data models for sankey-budget
//!
//! Money amounts, labelled income/expense entries and the budget document
//! that feeds the flow graph builder.

pub mod budget;
pub mod entry;
pub mod money;

pub use budget::BudgetDocument;
pub use entry::NamedAmount;
pub use money::{Money, MoneyParseError};
