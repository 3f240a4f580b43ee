//! Plotly figure output
//!
//! Produces a Plotly.js figure (`{"data": [...], "layout": {...}}`) for a
//! fixed-arrangement Sankey trace. Layout keys written in Plotly's
//! underscore shorthand (`title_text`, `title_font`, `font_size`) are
//! expanded into the nested objects Plotly.js expects.

use serde_json::{json, Map, Value};

use super::Renderer;
use crate::error::{SankeyError, SankeyResult};
use crate::flow::FlowGraph;

/// Layout attributes that are containers in Plotly.js
const LAYOUT_CONTAINERS: [&str; 8] = [
    "title",
    "font",
    "legend",
    "margin",
    "xaxis",
    "yaxis",
    "hoverlabel",
    "modebar",
];

const NODE_PAD: u32 = 15;
const NODE_THICKNESS: u32 = 20;
const NODE_LINE_COLOR: &str = "black";
const NODE_LINE_WIDTH: f64 = 0.5;

/// Renders a flow graph as Plotly figure JSON
#[derive(Debug, Clone)]
pub struct PlotlyRenderer {
    pretty: bool,
    currency_symbol: String,
}

impl Default for PlotlyRenderer {
    fn default() -> Self {
        Self::new("$")
    }
}

impl PlotlyRenderer {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            pretty: true,
            currency_symbol: currency_symbol.into(),
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Build the figure as a JSON value
    pub fn figure(&self, graph: &FlowGraph) -> Value {
        let labels: Vec<String> = graph
            .nodes
            .iter()
            .map(|n| n.display_label.replace('\n', "<br>"))
            .collect();
        let fills: Vec<&str> = graph.nodes.iter().map(|n| n.fill.as_str()).collect();
        let xs: Vec<f64> = graph.nodes.iter().map(|n| n.x()).collect();
        let ys: Vec<f64> = graph.nodes.iter().map(|n| n.y).collect();

        let sources: Vec<usize> = graph.edges.iter().map(|e| e.source.index()).collect();
        let targets: Vec<usize> = graph.edges.iter().map(|e| e.target.index()).collect();
        let values: Vec<f64> = graph.edges.iter().map(|e| e.value.as_f64()).collect();
        let colors: Vec<&str> = graph.edges.iter().map(|e| e.color.as_str()).collect();

        let hovertemplate = format!(
            "%{{source.label}} → %{{target.label}}: {}%{{value}}<extra></extra>",
            self.currency_symbol
        );

        json!({
            "data": [{
                "type": "sankey",
                "arrangement": "fixed",
                "node": {
                    "pad": NODE_PAD,
                    "thickness": NODE_THICKNESS,
                    "line": { "color": NODE_LINE_COLOR, "width": NODE_LINE_WIDTH },
                    "label": labels,
                    "color": fills,
                    "x": xs,
                    "y": ys,
                },
                "link": {
                    "source": sources,
                    "target": targets,
                    "value": values,
                    "color": colors,
                    "hovertemplate": hovertemplate,
                },
            }],
            "layout": expand_layout(&graph.presentation),
        })
    }
}

impl Renderer for PlotlyRenderer {
    fn render(&self, graph: &FlowGraph) -> SankeyResult<String> {
        let figure = self.figure(graph);
        let rendered = if self.pretty {
            serde_json::to_string_pretty(&figure)
        } else {
            serde_json::to_string(&figure)
        };
        rendered.map_err(|e| SankeyError::Render(e.to_string()))
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

/// Expand underscore shorthand keys into nested Plotly.js layout objects
pub fn expand_layout(presentation: &Map<String, Value>) -> Value {
    let mut layout = Map::new();
    for (key, value) in presentation {
        insert_layout_key(&mut layout, key, value.clone());
    }
    Value::Object(layout)
}

fn insert_layout_key(layout: &mut Map<String, Value>, key: &str, value: Value) {
    if let Some((head, rest)) = key.split_once('_') {
        if LAYOUT_CONTAINERS.contains(&head) && !rest.is_empty() {
            let slot = layout
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            // `title: "Text"` is shorthand for `title: {text: "Text"}`
            if slot.is_string() {
                let text = slot.take();
                *slot = json!({ "text": text });
            } else if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            if let Value::Object(inner) = slot {
                insert_layout_key(inner, rest, value);
            }
            return;
        }
    }

    if let Value::Object(incoming) = &value {
        if let Some(Value::Object(existing)) = layout.get_mut(key) {
            for (k, v) in incoming {
                insert_layout_key(existing, k, v.clone());
            }
            return;
        }
    }

    layout.insert(key.to_string(), value);
}
