//! CLI command for checking a budget without rendering it

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_entry_table, format_totals};
use crate::error::SankeyResult;
use crate::flow::{ConsistencyReporter, ConsoleReporter, EmptyInputPolicy};
use crate::import::load_budget;
use crate::models::BudgetDocument;

/// Arguments for `check`
#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Budget document (.yaml, .yml, .json or .csv)
    pub file: PathBuf,

    /// Accept documents with no incomes or no expenses
    #[arg(long)]
    pub allow_empty: bool,
}

/// Handle `check`
///
/// A deficit is reported but is not a failure; only invalid input is.
pub fn handle_check_command(settings: &Settings, args: CheckArgs) -> SankeyResult<()> {
    let document = load_budget(&args.file)?;
    let stdout = io::stdout();
    check_document(settings, &document, args.allow_empty, &mut stdout.lock())
}

/// Validate a document and write its entries, totals and consistency
pub fn check_document<W: Write>(
    settings: &Settings,
    document: &BudgetDocument,
    allow_empty: bool,
    out: &mut W,
) -> SankeyResult<()> {
    let mut builder = settings.builder()?;
    if allow_empty {
        builder = builder.empty_inputs(EmptyInputPolicy::Allow);
    }
    let options = settings.chart_options(document);
    let graph = builder.build(&document.incomes, &document.expenses, &options)?;
    let symbol = settings.currency_symbol.as_str();

    writeln!(out, "{}", format_entry_table(document, symbol))?;
    writeln!(out)?;
    write!(out, "{}", format_totals(&graph.totals, &graph.consistency, symbol))?;
    writeln!(out)?;

    let mut reporter = ConsoleReporter::new(out, symbol);
    reporter.report(&graph.totals, &graph.consistency);
    Ok(())
}
