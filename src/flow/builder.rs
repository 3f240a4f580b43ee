//! Flow graph construction
//!
//! `FlowGraphBuilder` turns the two ordered sides of a budget into a
//! three-column graph: every income flows into the Budget pool, and the pool
//! flows out to every expense. The pool is always valued at total income;
//! when expenses exceed income the graph is still built and the mismatch is
//! carried in `FlowGraph::consistency`.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::consistency::Totals;
use super::graph::{Edge, FlowGraph, Node, NodeId};
use super::layout::{column_positions, Column, POOL_Y};
use super::palette::{Palette, DEFAULT_POOL_COLOR, EXPENSE_FILL, INCOME_FILL};
use super::presentation::{merge_presentation, ChartOptions};
use crate::error::{SankeyError, SankeyResult};
use crate::models::entry::checked_total;
use crate::models::{Money, NamedAmount};

/// Label of the pool node
pub const POOL_LABEL: &str = "Budget";

/// What to do when one side of the budget has no entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyInputPolicy {
    /// Fail with a validation error
    #[default]
    Reject,
    /// Build a degenerate graph with an empty column
    Allow,
}

/// What to do when a label repeats on the same side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateLabelPolicy {
    #[default]
    Reject,
    /// Keep both entries as separate nodes
    Allow,
}

/// How the renderer fills nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeFill {
    /// One fill per column (incomes, pool, expenses)
    #[default]
    Column,
    /// Each node takes its category color
    Category,
}

/// Builds `FlowGraph`s with injected palettes and input policies
#[derive(Debug, Clone)]
pub struct FlowGraphBuilder {
    income_palette: Palette,
    expense_palette: Palette,
    pool_color: String,
    node_fill: NodeFill,
    empty_inputs: EmptyInputPolicy,
    duplicate_labels: DuplicateLabelPolicy,
    currency_symbol: String,
}

impl Default for FlowGraphBuilder {
    fn default() -> Self {
        Self::new(Palette::pastel1(), Palette::pastel2())
    }
}

impl FlowGraphBuilder {
    pub fn new(income_palette: Palette, expense_palette: Palette) -> Self {
        Self {
            income_palette,
            expense_palette,
            pool_color: DEFAULT_POOL_COLOR.to_string(),
            node_fill: NodeFill::default(),
            empty_inputs: EmptyInputPolicy::default(),
            duplicate_labels: DuplicateLabelPolicy::default(),
            currency_symbol: "$".to_string(),
        }
    }

    pub fn pool_color(mut self, color: impl Into<String>) -> Self {
        self.pool_color = color.into();
        self
    }

    pub fn node_fill(mut self, fill: NodeFill) -> Self {
        self.node_fill = fill;
        self
    }

    pub fn empty_inputs(mut self, policy: EmptyInputPolicy) -> Self {
        self.empty_inputs = policy;
        self
    }

    pub fn duplicate_labels(mut self, policy: DuplicateLabelPolicy) -> Self {
        self.duplicate_labels = policy;
        self
    }

    pub fn currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Check the inputs against the configured policies
    ///
    /// Negative amounts and blank labels are always rejected. Totals that
    /// don't match are never an error.
    pub fn validate(&self, incomes: &[NamedAmount], expenses: &[NamedAmount]) -> SankeyResult<()> {
        if self.empty_inputs == EmptyInputPolicy::Reject {
            if incomes.is_empty() {
                return Err(SankeyError::EmptyInput("income source"));
            }
            if expenses.is_empty() {
                return Err(SankeyError::EmptyInput("expense category"));
            }
        }

        self.validate_side("income", incomes)?;
        self.validate_side("expense", expenses)
    }

    fn validate_side(&self, side: &'static str, entries: &[NamedAmount]) -> SankeyResult<()> {
        let mut seen = HashSet::new();
        for entry in entries {
            if entry.label.trim().is_empty() {
                return Err(SankeyError::Validation(format!(
                    "Every {} needs a label",
                    side
                )));
            }
            if entry.amount.is_negative() {
                return Err(SankeyError::Validation(format!(
                    "Amount for {} '{}' cannot be negative: {}",
                    side, entry.label, entry.amount
                )));
            }
            if self.duplicate_labels == DuplicateLabelPolicy::Reject
                && !seen.insert(entry.label.as_str())
            {
                return Err(SankeyError::DuplicateLabel {
                    side,
                    label: entry.label.clone(),
                });
            }
        }
        Ok(())
    }

    /// Build the flow graph for one budget
    pub fn build(
        &self,
        incomes: &[NamedAmount],
        expenses: &[NamedAmount],
        options: &ChartOptions,
    ) -> SankeyResult<FlowGraph> {
        self.validate(incomes, expenses)?;

        let totals = Totals::new(
            side_total("income", incomes)?,
            side_total("expense", expenses)?,
        );
        let consistency = totals.consistency();
        debug!(
            incomes = incomes.len(),
            expenses = expenses.len(),
            %consistency,
            "building flow graph"
        );

        let mut nodes = Vec::with_capacity(incomes.len() + 1 + expenses.len());

        for (i, (entry, y)) in incomes.iter().zip(column_positions(incomes.len())).enumerate() {
            let color = self.income_palette.color_at(i).to_string();
            nodes.push(self.entry_node(nodes.len(), entry, Column::Income, y, color));
        }

        let pool = NodeId(nodes.len());
        nodes.push(Node {
            id: pool,
            label: POOL_LABEL.to_string(),
            amount: totals.income,
            display_label: self.display_label(POOL_LABEL, totals.income),
            column: Column::Pool,
            y: POOL_Y,
            color: self.pool_color.clone(),
            fill: self.pool_color.clone(),
        });

        for (i, (entry, y)) in expenses.iter().zip(column_positions(expenses.len())).enumerate() {
            let color = self.expense_palette.color_at(i).to_string();
            nodes.push(self.entry_node(nodes.len(), entry, Column::Expense, y, color));
        }

        let edges = nodes
            .iter()
            .filter(|node| node.column != Column::Pool)
            .map(|node| {
                let (source, target) = match node.column {
                    Column::Income => (node.id, pool),
                    _ => (pool, node.id),
                };
                Edge {
                    source,
                    target,
                    value: node.amount,
                    color: node.color.clone(),
                }
            })
            .collect();

        Ok(FlowGraph {
            nodes,
            edges,
            presentation: merge_presentation(options),
            totals,
            consistency,
            pool,
        })
    }

    fn entry_node(
        &self,
        index: usize,
        entry: &NamedAmount,
        column: Column,
        y: f64,
        color: String,
    ) -> Node {
        let fill = match self.node_fill {
            NodeFill::Category => color.clone(),
            NodeFill::Column if column == Column::Income => INCOME_FILL.to_string(),
            NodeFill::Column => EXPENSE_FILL.to_string(),
        };

        Node {
            id: NodeId(index),
            label: entry.label.clone(),
            amount: entry.amount,
            display_label: self.display_label(&entry.label, entry.amount),
            column,
            y,
            color,
            fill,
        }
    }

    fn display_label(&self, label: &str, amount: Money) -> String {
        format!("{}\n{}", label, amount.format_grouped(&self.currency_symbol))
    }
}

fn side_total(side: &str, entries: &[NamedAmount]) -> SankeyResult<Money> {
    checked_total(entries).ok_or_else(|| {
        SankeyError::Validation(format!("Total {} is too large to represent", side))
    })
}
