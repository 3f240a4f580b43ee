//! CLI commands that build and render a chart
//!
//! `render` loads a budget document from disk, `demo` uses the built-in
//! sample budget. Both report consistency on stderr and then write the
//! rendered chart to the output file or stdout.

use std::io;
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use serde_json::Value;
use tracing::debug;

use crate::config::settings::Settings;
use crate::error::SankeyResult;
use crate::export::write_output;
use crate::flow::presentation::parse_override;
use crate::flow::{
    ChartOptions, ConsistencyReporter, ConsoleReporter, EmptyInputPolicy, FlowGraph,
    TracingReporter,
};
use crate::import::load_budget;
use crate::models::BudgetDocument;
use crate::render::{HtmlRenderer, OutputFormat, Renderer};

/// Output and presentation options shared by `render` and `demo`
#[derive(Args, Debug, Clone, Default)]
pub struct ChartArgs {
    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write the chart to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,

    /// Chart title color
    #[arg(long)]
    pub title_color: Option<String>,

    /// Plotly layout override, e.g. `paper_bgcolor=white` or `width=1200`
    #[arg(long = "layout", value_name = "KEY=VALUE", value_parser = parse_layout_arg)]
    pub layout: Vec<(String, Value)>,
}

/// Arguments for `render`
#[derive(Args, Debug, Clone)]
pub struct RenderArgs {
    /// Budget document (.yaml, .yml, .json or .csv)
    pub file: PathBuf,

    #[command(flatten)]
    pub chart: ChartArgs,

    /// Build a chart even if incomes or expenses are empty
    #[arg(long)]
    pub allow_empty: bool,
}

/// Arguments for `demo`
#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    #[command(flatten)]
    pub chart: ChartArgs,
}

fn parse_layout_arg(raw: &str) -> Result<(String, Value), String> {
    parse_override(raw).ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))
}

/// Handle `render`
pub fn handle_render_command(settings: &Settings, args: RenderArgs) -> SankeyResult<()> {
    let document = load_budget(&args.file)?;
    render_document(settings, &document, &args.chart, args.allow_empty)
}

/// Handle `demo`
pub fn handle_demo_command(settings: &Settings, args: DemoArgs) -> SankeyResult<()> {
    render_document(settings, &BudgetDocument::sample(), &args.chart, false)
}

/// Chart options from settings, the document and command-line flags
///
/// Flags win over the document, which wins over settings.
pub fn chart_options(settings: &Settings, document: &BudgetDocument, args: &ChartArgs) -> ChartOptions {
    let mut options = settings.chart_options(document);
    if let Some(title) = &args.title {
        options.title = title.clone();
    }
    if let Some(color) = &args.title_color {
        options.title_color = color.clone();
    }
    for (key, value) in &args.layout {
        options = options.with_override(key.clone(), value.clone());
    }
    options
}

/// Build the flow graph for a document and report its consistency on stderr
pub fn build_graph(
    settings: &Settings,
    document: &BudgetDocument,
    args: &ChartArgs,
    allow_empty: bool,
) -> SankeyResult<FlowGraph> {
    let mut builder = settings.builder()?;
    if allow_empty {
        builder = builder.empty_inputs(EmptyInputPolicy::Allow);
    }

    let options = chart_options(settings, document, args);
    let graph = builder.build(&document.incomes, &document.expenses, &options)?;

    TracingReporter.report(&graph.totals, &graph.consistency);
    ConsoleReporter::new(io::stderr(), settings.currency_symbol.as_str())
        .report(&graph.totals, &graph.consistency);

    Ok(graph)
}

fn render_document(
    settings: &Settings,
    document: &BudgetDocument,
    args: &ChartArgs,
    allow_empty: bool,
) -> SankeyResult<()> {
    let graph = build_graph(settings, document, args, allow_empty)?;

    let format = args.format.unwrap_or(settings.default_format);
    let renderer: Box<dyn Renderer> = match format {
        OutputFormat::Html => Box::new(
            HtmlRenderer::new(settings.currency_symbol.as_str()).generated_at(Utc::now()),
        ),
        other => other.renderer(&settings.currency_symbol),
    };
    debug!(%format, "rendering chart");

    let rendered = renderer.render(&graph)?;
    write_output(args.output.as_deref(), &rendered)?;

    if let Some(path) = &args.output {
        eprintln!("Chart written to {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_layout_arg() {
        assert_eq!(
            parse_layout_arg("width=1200").unwrap(),
            ("width".to_string(), Value::from(1200))
        );
        assert_eq!(
            parse_layout_arg("paper_bgcolor=white").unwrap(),
            ("paper_bgcolor".to_string(), Value::from("white"))
        );
        assert!(parse_layout_arg("no-equals").is_err());
    }

    #[test]
    fn test_flags_win_over_document() {
        let mut doc = BudgetDocument::sample();
        doc.layout.insert("width".into(), Value::from(800));
        let args = ChartArgs {
            title: Some("From Flag".into()),
            layout: vec![("width".into(), Value::from(1400))],
            ..ChartArgs::default()
        };

        let options = chart_options(&Settings::default(), &doc, &args);
        assert_eq!(options.title, "From Flag");
        assert_eq!(options.title_color, "black");
        assert_eq!(options.layout_overrides["width"], 1400);
        assert_eq!(options.layout_overrides["paper_bgcolor"], "white");
    }

    #[test]
    fn test_build_graph_allow_empty() {
        let doc = BudgetDocument::new(vec![], vec![]);
        let settings = Settings::default();

        assert!(build_graph(&settings, &doc, &ChartArgs::default(), false).is_err());
        let graph = build_graph(&settings, &doc, &ChartArgs::default(), true).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert!(graph.edges.is_empty());
    }

    #[test]
    fn test_render_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("demo.json");
        let args = DemoArgs {
            chart: ChartArgs {
                format: Some(OutputFormat::Json),
                output: Some(output.clone()),
                ..ChartArgs::default()
            },
        };

        handle_demo_command(&Settings::default(), args).unwrap();

        let figure: Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(figure["layout"]["title"]["text"], "Annual Budget Overview");
    }
}
