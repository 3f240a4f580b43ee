//! Standalone HTML output
//!
//! Wraps the Plotly figure in a page that loads plotly.js and draws the
//! chart when opened in a browser.

use chrono::{DateTime, Utc};

use super::plotly::PlotlyRenderer;
use super::Renderer;
use crate::error::{SankeyError, SankeyResult};
use crate::flow::FlowGraph;

/// plotly.js bundle loaded by generated pages
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const CHART_ELEMENT_ID: &str = "budget-sankey";

/// Renders a flow graph as a self-contained HTML page
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    plotly: PlotlyRenderer,
    script_src: String,
    generated_at: Option<DateTime<Utc>>,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("$")
    }
}

impl HtmlRenderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            plotly: PlotlyRenderer::new(currency_symbol).pretty(false),
            script_src: PLOTLY_CDN.to_string(),
            generated_at: None,
        }
    }

    /// Load plotly.js from somewhere other than the CDN
    pub fn script_src(mut self, src: impl Into<String>) -> Self {
        self.script_src = src.into();
        self
    }

    /// Stamp the page with a generation time
    pub fn generated_at(mut self, at: DateTime<Utc>) -> Self {
        self.generated_at = Some(at);
        self
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, graph: &FlowGraph) -> SankeyResult<String> {
        let figure = serde_json::to_string(&self.plotly.figure(graph))
            .map_err(|e| SankeyError::Render(e.to_string()))?;
        // Keep a label containing "</script>" from ending the inline script
        let figure = figure.replace("</", "<\\/");

        let title = escape_html(graph.title().unwrap_or("Budget Sankey Diagram"));
        let generated = self
            .generated_at
            .map(|at| {
                format!(
                    "    <meta name=\"generated\" content=\"{}\">\n",
                    at.to_rfc3339()
                )
            })
            .unwrap_or_default();

        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="generator" content="sankey-budget {version}">
{generated}    <title>{title}</title>
    <script src="{src}"></script>
  </head>
  <body>
    <div id="{id}"></div>
    <script>
      const figure = {figure};
      Plotly.newPlot("{id}", figure.data, figure.layout, {{ responsive: true }});
    </script>
  </body>
</html>
"#,
            version = env!("CARGO_PKG_VERSION"),
            generated = generated,
            title = title,
            src = escape_html(&self.script_src),
            id = CHART_ELEMENT_ID,
            figure = figure,
        ))
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::{ChartOptions, FlowGraphBuilder};
    use crate::models::NamedAmount;
    use chrono::TimeZone;

    fn graph_titled(title: &str, income_label: &str) -> FlowGraph {
        FlowGraphBuilder::default()
            .build(
                &[NamedAmount::dollars(income_label, 100)],
                &[NamedAmount::dollars("Rent", 80)],
                &ChartOptions::new(title, "black"),
            )
            .unwrap()
    }

    #[test]
    fn test_page_structure() {
        let html = HtmlRenderer::default()
            .render(&graph_titled("Household", "Salary"))
            .unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Household</title>"));
        assert!(html.contains(PLOTLY_CDN));
        assert!(html.contains("Plotly.newPlot(\"budget-sankey\""));
        assert!(html.contains("\"type\":\"sankey\""));
        assert!(!html.contains("name=\"generated\""));
    }

    #[test]
    fn test_title_and_labels_are_escaped() {
        let html = HtmlRenderer::default()
            .render(&graph_titled("<b>Budget</b>", "</script><script>alert(1)"))
            .unwrap();

        assert!(html.contains("<title>&lt;b&gt;Budget&lt;/b&gt;</title>"));
        assert!(!html.contains("</script><script>alert(1)"));
    }

    #[test]
    fn test_generated_stamp() {
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let html = HtmlRenderer::default()
            .generated_at(at)
            .render(&graph_titled("Budget", "Salary"))
            .unwrap();
        assert!(html.contains("content=\"2025-01-15T12:00:00+00:00\""));
    }
}
