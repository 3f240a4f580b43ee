//! Budget flow graph
//!
//! Turns income sources and expense categories into a three-column flow
//! graph (incomes → Budget pool → expenses) with positions, colors, merged
//! presentation options and an income/expense consistency check.

pub mod builder;
pub mod consistency;
pub mod graph;
pub mod layout;
pub mod palette;
pub mod presentation;

pub use builder::{
    DuplicateLabelPolicy, EmptyInputPolicy, FlowGraphBuilder, NodeFill, POOL_LABEL,
};
pub use consistency::{
    ConsistencyReporter, ConsoleReporter, Consistency, Severity, Totals, TracingReporter,
};
pub use graph::{Edge, FlowGraph, Node, NodeId};
pub use layout::Column;
pub use palette::Palette;
pub use presentation::ChartOptions;
