//! Chart presentation options
//!
//! Presentation is an open key/value map in Plotly's layout vocabulary. The
//! builder starts from fixed defaults and lets caller overrides win on any
//! key collision.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

pub const TITLE_FONT_SIZE: u32 = 24;
pub const FONT_SIZE: u32 = 12;
pub const CHART_HEIGHT: u32 = 700;
pub const CHART_WIDTH: u32 = 1000;

/// Per-chart options supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub title: String,
    pub title_color: String,
    #[serde(default)]
    pub layout_overrides: Map<String, Value>,
}

impl ChartOptions {
    pub fn new(title: impl Into<String>, title_color: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_color: title_color.into(),
            layout_overrides: Map::new(),
        }
    }

    /// Add or replace one layout override
    pub fn with_override(mut self, key: impl Into<String>, value: Value) -> Self {
        self.layout_overrides.insert(key.into(), value);
        self
    }

    /// Merge a batch of overrides; later batches win
    pub fn with_overrides(mut self, overrides: &Map<String, Value>) -> Self {
        for (key, value) in overrides {
            self.layout_overrides.insert(key.clone(), value.clone());
        }
        self
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::new("Budget Sankey Diagram", "black")
    }
}

/// The default layout for a chart title and color
pub fn default_presentation(title: &str, title_color: &str) -> Map<String, Value> {
    let mut layout = Map::new();
    layout.insert("title_text".into(), Value::from(title));
    layout.insert(
        "title_font".into(),
        json!({ "size": TITLE_FONT_SIZE, "color": title_color }),
    );
    layout.insert("font_size".into(), Value::from(FONT_SIZE));
    layout.insert("height".into(), Value::from(CHART_HEIGHT));
    layout.insert("width".into(), Value::from(CHART_WIDTH));
    layout
}

/// Build the final presentation: defaults first, overrides win
pub fn merge_presentation(options: &ChartOptions) -> Map<String, Value> {
    let mut layout = default_presentation(&options.title, &options.title_color);
    for (key, value) in &options.layout_overrides {
        layout.insert(key.clone(), value.clone());
    }
    layout
}

/// Parse a `KEY=VALUE` override; VALUE is JSON if it parses, else a string
pub fn parse_override(raw: &str) -> Option<(String, Value)> {
    let (key, value) = raw.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    let value = value.trim();
    let parsed = serde_json::from_str(value).unwrap_or_else(|_| Value::from(value));
    Some((key.to_string(), parsed))
}
