//! Plain-text output for terminals

use super::Renderer;
use crate::display::report::{centered, rule};
use crate::display::{format_flow_table, format_shape, format_totals};
use crate::error::SankeyResult;
use crate::flow::FlowGraph;

const REPORT_WIDTH: usize = 60;

/// Renders a flow graph as a table of flows with proportional bars
#[derive(Debug, Clone)]
pub struct TextRenderer {
    currency_symbol: String,
    bar_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new("$")
    }
}

impl TextRenderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
            bar_width: 20,
        }
    }

    pub fn bar_width(mut self, width: usize) -> Self {
        self.bar_width = width;
        self
    }
}

impl Renderer for TextRenderer {
    fn render(&self, graph: &FlowGraph) -> SankeyResult<String> {
        let mut output = String::new();
        output.push_str(&centered(
            graph.title().unwrap_or("Budget"),
            REPORT_WIDTH,
        ));
        output.push('\n');
        output.push_str(&rule(REPORT_WIDTH, true));
        output.push('\n');
        output.push_str(&format_shape(graph));
        output.push_str("\n\n");
        output.push_str(&format_flow_table(
            graph,
            &self.currency_symbol,
            self.bar_width,
        ));
        output.push_str("\n\n");
        output.push_str(&format_totals(
            &graph.totals,
            &graph.consistency,
            &self.currency_symbol,
        ));
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}
