//! Budget summary formatting
//!
//! Tables of the budget's flows and a totals/consistency block, shared by
//! the text renderer and the `check` command.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::report::{amount_bar, format_share, rule, share};
use crate::flow::{Column, Consistency, FlowGraph, Totals};
use crate::models::{BudgetDocument, Money, NamedAmount};

/// One row of the flow table
#[derive(Tabled)]
struct FlowRow {
    #[tabled(rename = "Flow")]
    flow: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// One row of the entry table used by `check`
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Side")]
    side: &'static str,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Table of every edge with its share of total income
pub fn format_flow_table(graph: &FlowGraph, symbol: &str, bar_width: usize) -> String {
    let budget = graph.pool_node().amount;
    let largest = graph
        .edges
        .iter()
        .map(|e| e.value)
        .max()
        .unwrap_or_default();

    let rows: Vec<FlowRow> = graph
        .edges
        .iter()
        .filter_map(|edge| {
            let source = graph.node(edge.source)?;
            let target = graph.node(edge.target)?;
            Some(FlowRow {
                flow: format!("{} → {}", source.label, target.label),
                amount: edge.value.format_grouped(symbol),
                share: share(edge.value, budget)
                    .map(format_share)
                    .unwrap_or_else(|| "-".to_string()),
                bar: amount_bar(edge.value, largest, bar_width),
            })
        })
        .collect();

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..3)).with(Alignment::right()))
        .to_string()
}

/// Table of the raw entries of a budget document
pub fn format_entry_table(document: &BudgetDocument, symbol: &str) -> String {
    let side_rows = |side: &'static str, entries: &[NamedAmount]| -> Vec<EntryRow> {
        entries
            .iter()
            .map(|e| EntryRow {
                side,
                label: e.label.clone(),
                amount: e.amount.format_grouped(symbol),
            })
            .collect()
    };

    let mut rows = side_rows("Income", &document.incomes);
    rows.extend(side_rows("Expense", &document.expenses));

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::single(2)).with(Alignment::right()))
        .to_string()
}

/// Totals and consistency block
pub fn format_totals(totals: &Totals, consistency: &Consistency, symbol: &str) -> String {
    let width = 40;
    let mut output = String::new();
    output.push_str(&rule(width, false));
    output.push('\n');
    output.push_str(&total_line("Total Income:", totals.income, symbol));
    output.push_str(&total_line("Total Expenses:", totals.expenses, symbol));
    output.push_str(&rule(width, false));
    output.push('\n');

    let status = match consistency {
        Consistency::Balanced => "Balanced ✓".to_string(),
        Consistency::Surplus(gap) => format!("Surplus {} ✓", gap.format_grouped(symbol)),
        Consistency::Deficit(gap) => format!("Deficit {} ⚠", gap.format_grouped(symbol)),
    };
    output.push_str(&format!("{:<16}{:>24}\n", "Status:", status));
    output
}

fn total_line(label: &str, amount: Money, symbol: &str) -> String {
    format!("{:<16}{:>24}\n", label, amount.format_grouped(symbol))
}

/// Short description of the node counts in each column
pub fn format_shape(graph: &FlowGraph) -> String {
    format!(
        "{} income → {} → {} expense ({} nodes, {} flows)",
        graph.nodes_in(Column::Income).count(),
        Column::Pool.name(),
        graph.nodes_in(Column::Expense).count(),
        graph.nodes.len(),
        graph.edges.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{ChartOptions, FlowGraphBuilder};

    fn graph() -> FlowGraph {
        FlowGraphBuilder::default()
            .build(
                &[NamedAmount::dollars("Salary", 1000), NamedAmount::dollars("Gift", 200)],
                &[NamedAmount::dollars("Rent", 800), NamedAmount::dollars("Food", 300)],
                &ChartOptions::default(),
            )
            .unwrap()
    }

    #[test]
    fn test_flow_table() {
        let table = format_flow_table(&graph(), "$", 10);
        assert!(table.contains("Salary → Budget"));
        assert!(table.contains("Budget → Food"));
        assert!(table.contains("$1,000.00"));
        assert!(table.contains("25%"));
    }

    #[test]
    fn test_totals_block() {
        let graph = graph();
        let block = format_totals(&graph.totals, &graph.consistency, "$");
        assert!(block.contains("Total Income:"));
        assert!(block.contains("$1,200.00"));
        assert!(block.contains("Surplus $100.00"));
    }

    #[test]
    fn test_entry_table() {
        let doc = BudgetDocument::new(
            vec![NamedAmount::dollars("Salary", 10)],
            vec![NamedAmount::dollars("Rent", 5)],
        );
        let table = format_entry_table(&doc, "$");
        assert!(table.contains("Income"));
        assert!(table.contains("Rent"));
        assert!(table.contains("$5.00"));
    }

    #[test]
    fn test_shape() {
        assert_eq!(
            format_shape(&graph()),
            "2 income → Budget → 2 expense (5 nodes, 4 flows)"
        );
    }
}
