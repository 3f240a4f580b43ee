//! The renderable flow graph
//!
//! Nodes live in a vector and are referred to by `NodeId` (their index), so
//! two entries with the same label and amount are still two nodes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::consistency::{Consistency, Totals};
use super::layout::Column;
use crate::models::Money;

/// Index of a node in `FlowGraph::nodes`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Raw label, e.g. "Rent"
    pub label: String,
    pub amount: Money,
    /// Label shown on the chart, e.g. "Rent\n$800.00"
    pub display_label: String,
    pub column: Column,
    pub y: f64,
    /// Category color (palette color, or the pool color)
    pub color: String,
    /// Fill the renderer paints the node with
    pub fill: String,
}

impl Node {
    pub fn x(&self) -> f64 {
        self.column.x()
    }
}

/// One flow between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    pub value: Money,
    pub color: String,
}

/// Everything a renderer needs to draw the budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub presentation: Map<String, Value>,
    pub totals: Totals,
    pub consistency: Consistency,
    pub pool: NodeId,
}

impl FlowGraph {
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn pool_node(&self) -> &Node {
        &self.nodes[self.pool.index()]
    }

    pub fn nodes_in(&self, column: Column) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.column == column)
    }

    pub fn income_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes_in(Column::Income)
    }

    pub fn expense_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes_in(Column::Expense)
    }

    /// Title text from the merged presentation, if any
    pub fn title(&self) -> Option<&str> {
        self.presentation.get("title_text").and_then(Value::as_str)
    }
}
