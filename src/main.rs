use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sankey_budget::cli::{
    handle_check_command, handle_demo_command, handle_render_command, CheckArgs, DemoArgs,
    RenderArgs,
};
use sankey_budget::config::{paths::SankeyPaths, settings::Settings};
use sankey_budget::import::load_budget;
use sankey_budget::models::BudgetDocument;

#[derive(Parser)]
#[command(
    name = "sankey-budget",
    version,
    about = "Budget Sankey diagrams from your incomes and expenses",
    long_about = "sankey-budget turns a list of income sources and expense categories \
                  into a Sankey flow chart: every income flows into a single Budget \
                  pool, and the pool flows out to every expense. Mismatched totals \
                  are reported, never rejected."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a budget document as a chart
    Render(RenderArgs),

    /// Show totals and consistency for a budget document
    Check(CheckArgs),

    /// Render the built-in sample budget
    Demo(DemoArgs),

    /// Enter a budget interactively and generate a chart
    #[command(alias = "ui")]
    Form {
        /// Budget document to prefill the form with
        file: Option<PathBuf>,

        /// Where to write the generated HTML chart
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The form owns the terminal; log lines would corrupt the screen
    if !matches!(cli.command, Some(Commands::Form { .. })) {
        init_tracing(cli.verbose);
    }

    let paths = SankeyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Render(args)) => handle_render_command(&settings, args)?,
        Some(Commands::Check(args)) => handle_check_command(&settings, args)?,
        Some(Commands::Demo(args)) => handle_demo_command(&settings, args)?,
        Some(Commands::Form { file, output }) => {
            let document = match file {
                Some(path) => load_budget(path)?,
                None => BudgetDocument::default(),
            };
            let output = output.unwrap_or_else(|| paths.default_chart_file());
            if let Some(path) = sankey_budget::tui::run_form(&settings, document, output)? {
                println!("Chart written to {}", path.display());
            }
        }
        Some(Commands::Init) => {
            println!("Initializing sankey-budget at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Run 'sankey-budget demo -o demo.html' to see a sample chart.");
        }
        Some(Commands::Config) => {
            println!("sankey-budget Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Charts directory: {}", paths.charts_dir().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Default title:     {}", settings.default_title);
            println!("  Title color:       {}", settings.default_title_color);
            println!("  Default format:    {}", settings.default_format);
            println!("  Node fill:         {:?}", settings.node_fill);
            println!("  Empty inputs:      {:?}", settings.empty_inputs);
            println!("  Duplicate labels:  {:?}", settings.duplicate_labels);
            println!("  Income palette:    {}", settings.income_palette.join(", "));
            println!("  Expense palette:   {}", settings.expense_palette.join(", "));
        }
        None => {
            println!("sankey-budget - Budget Sankey diagrams");
            println!();
            println!("Run 'sankey-budget --help' for usage information.");
            println!("Run 'sankey-budget form' to enter a budget interactively.");
        }
    }

    Ok(())
}
