//! Income vs expense consistency
//!
//! The comparison is a value, not an error. How it reaches the user is
//! decided by a `ConsistencyReporter`: a log event, a line on the console,
//! or a notification in the interactive form.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::models::Money;

/// Total income and total expenses of one budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
}

impl Totals {
    pub fn new(income: Money, expenses: Money) -> Self {
        Self { income, expenses }
    }

    pub fn consistency(&self) -> Consistency {
        Consistency::from_totals(self.income, self.expenses)
    }
}

/// Relationship between total income and total expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "lowercase")]
pub enum Consistency {
    Balanced,
    /// Income exceeds expenses by this amount
    Surplus(Money),
    /// Expenses exceed income by this amount
    Deficit(Money),
}

impl Consistency {
    pub fn from_totals(income: Money, expenses: Money) -> Self {
        match income.cmp(&expenses) {
            std::cmp::Ordering::Equal => Self::Balanced,
            std::cmp::Ordering::Greater => Self::Surplus(income - expenses),
            std::cmp::Ordering::Less => Self::Deficit(expenses - income),
        }
    }

    pub fn is_deficit(&self) -> bool {
        matches!(self, Self::Deficit(_))
    }

    /// Absolute difference between the totals
    pub fn discrepancy(&self) -> Money {
        match self {
            Self::Balanced => Money::zero(),
            Self::Surplus(amount) | Self::Deficit(amount) => *amount,
        }
    }

    pub fn severity(&self) -> Severity {
        if self.is_deficit() {
            Severity::Warning
        } else {
            Severity::Success
        }
    }

    /// User-facing messages for this result
    pub fn messages(&self, totals: &Totals, symbol: &str) -> Vec<String> {
        let income = totals.income.format_grouped(symbol);
        let expenses = totals.expenses.format_grouped(symbol);

        match self {
            Self::Deficit(gap) => vec![
                format!(
                    "Total expenses ({}) exceed total income ({}).",
                    expenses, income
                ),
                format!("Discrepancy: {}", gap.format_grouped(symbol)),
            ],
            Self::Surplus(gap) => vec![
                format!("Total Income: {}", income),
                format!("Total Expenses: {}", expenses),
                format!("Unallocated: {}", gap.format_grouped(symbol)),
            ],
            Self::Balanced => vec![
                format!("Total Income: {}", income),
                format!("Total Expenses: {}", expenses),
            ],
        }
    }
}

impl std::fmt::Display for Consistency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balanced => write!(f, "Balanced"),
            Self::Surplus(amount) => write!(f, "Surplus ({})", amount),
            Self::Deficit(amount) => write!(f, "Deficit ({})", amount),
        }
    }
}

/// How a consistency result should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
}

/// Surfaces a consistency result to the user
pub trait ConsistencyReporter {
    fn report(&mut self, totals: &Totals, consistency: &Consistency);
}

/// Emits consistency results as tracing events
#[derive(Debug, Default)]
pub struct TracingReporter;

impl ConsistencyReporter for TracingReporter {
    fn report(&mut self, totals: &Totals, consistency: &Consistency) {
        match consistency {
            Consistency::Deficit(gap) => tracing::warn!(
                income = %totals.income,
                expenses = %totals.expenses,
                discrepancy = %gap,
                "expenses exceed income"
            ),
            _ => tracing::info!(
                income = %totals.income,
                expenses = %totals.expenses,
                %consistency,
                "budget totals"
            ),
        }
    }
}

/// Writes consistency messages to any writer (stderr for the CLI)
pub struct ConsoleReporter<W: Write> {
    writer: W,
    symbol: String,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(writer: W, symbol: impl Into<String>) -> Self {
        Self {
            writer,
            symbol: symbol.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ConsistencyReporter for ConsoleReporter<W> {
    fn report(&mut self, totals: &Totals, consistency: &Consistency) {
        let prefix = match consistency.severity() {
            Severity::Warning => "Warning: ",
            Severity::Success => "",
        };
        for message in consistency.messages(totals, &self.symbol) {
            // A closed stderr is not worth failing a render over
            let _ = writeln!(self.writer, "{}{}", prefix, message);
        }
    }
}
