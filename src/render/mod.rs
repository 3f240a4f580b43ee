//! Chart renderers
//!
//! A renderer turns a `FlowGraph` into an artifact: Plotly figure JSON, a
//! standalone HTML page, or a plain-text report.

pub mod html;
pub mod plotly;
pub mod text;

use serde::{Deserialize, Serialize};

use crate::error::SankeyResult;
use crate::flow::FlowGraph;

pub use html::HtmlRenderer;
pub use plotly::PlotlyRenderer;
pub use text::TextRenderer;

/// Something that can draw a flow graph
pub trait Renderer {
    fn render(&self, graph: &FlowGraph) -> SankeyResult<String>;

    /// File extension for this renderer's output
    fn extension(&self) -> &'static str;
}

/// Output formats selectable from the command line and settings
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Standalone HTML page drawing the chart with plotly.js
    #[default]
    Html,
    /// Plotly figure JSON
    Json,
    /// Plain-text table for the terminal
    Text,
}

impl OutputFormat {
    /// Create the renderer for this format
    pub fn renderer(self, currency_symbol: &str) -> Box<dyn Renderer> {
        match self {
            Self::Html => Box::new(HtmlRenderer::new(currency_symbol)),
            Self::Json => Box::new(PlotlyRenderer::new(currency_symbol)),
            Self::Text => Box::new(TextRenderer::new(currency_symbol)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_extensions() {
        assert_eq!(OutputFormat::Html.renderer("$").extension(), "html");
        assert_eq!(OutputFormat::Json.renderer("$").extension(), "json");
        assert_eq!(OutputFormat::Text.renderer("$").extension(), "txt");
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Text).unwrap();
        assert_eq!(json, "\"text\"");
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }
}
