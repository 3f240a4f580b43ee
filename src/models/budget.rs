//! Budget document model
//!
//! A `BudgetDocument` is everything a chart needs: the two ordered sides of
//! the budget plus optional title, title color and layout overrides.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::entry::{deserialize_entries, total, NamedAmount};
use super::money::Money;

/// A budget as read from a file or collected by the interactive form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetDocument {
    /// Chart title (falls back to the configured default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Chart title color (falls back to the configured default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,

    /// Layout overrides merged over the chart defaults
    #[serde(default, alias = "custom_layout", skip_serializing_if = "Map::is_empty")]
    pub layout: Map<String, Value>,

    /// Income sources in document order
    #[serde(
        default,
        alias = "income",
        alias = "income_sources",
        deserialize_with = "deserialize_entries"
    )]
    pub incomes: Vec<NamedAmount>,

    /// Expense categories in document order
    #[serde(default, alias = "expense", deserialize_with = "deserialize_entries")]
    pub expenses: Vec<NamedAmount>,
}

impl BudgetDocument {
    pub fn new(incomes: Vec<NamedAmount>, expenses: Vec<NamedAmount>) -> Self {
        Self {
            incomes,
            expenses,
            ..Self::default()
        }
    }

    pub fn total_income(&self) -> Money {
        total(&self.incomes)
    }

    pub fn total_expenses(&self) -> Money {
        total(&self.expenses)
    }

    /// The annual budget used by `sankey-budget demo`
    pub fn sample() -> Self {
        let incomes = vec![
            NamedAmount::dollars("Job Salary", 165_000),
            NamedAmount::dollars("Miranda", 7_200),
            NamedAmount::dollars("Chase Cash Back", 600),
            NamedAmount::dollars("VMFXX Dividend", 1_800),
        ];
        let expenses = vec![
            NamedAmount::dollars("Rent", 27_120),
            NamedAmount::dollars("Groceries", 7_200),
            NamedAmount::dollars("Utilities", 4_800),
            NamedAmount::dollars("Transportation", 1_620),
            NamedAmount::new("Subscriptions", Money::from_cents(39_360)),
            NamedAmount::dollars("Entertainment", 204),
            NamedAmount::new("Renters Insurance", Money::from_cents(13_692)),
        ];

        let mut layout = Map::new();
        layout.insert("paper_bgcolor".into(), Value::from("white"));
        layout.insert("plot_bgcolor".into(), Value::from("white"));

        Self {
            title: Some("Annual Budget Overview".into()),
            title_color: Some("black".into()),
            layout,
            incomes,
            expenses,
        }
    }
}
