//! sankey-budget - Budget Sankey diagrams
//!
//! This library turns two ordered lists of named amounts, income sources and
//! expense categories, into a three-column flow graph (incomes → Budget
//! pool → expenses) and renders it as a Plotly Sankey chart.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, named amounts and budget documents
//! - `flow`: Flow graph construction, layout, palettes and consistency
//! - `render`: Plotly JSON, standalone HTML and plain-text renderers
//! - `import`: Budget document loading (YAML, JSON, CSV)
//! - `export`: Atomic output writing
//! - `display`: Terminal tables and summaries
//! - `cli`: Command handlers
//! - `tui`: Interactive budget form
//!
//! # Example
//!
//! ```rust
//! use sankey_budget::flow::{ChartOptions, FlowGraphBuilder};
//! use sankey_budget::models::{Money, NamedAmount};
//!
//! let graph = FlowGraphBuilder::default().build(
//!     &[NamedAmount::dollars("Salary", 1000)],
//!     &[NamedAmount::dollars("Rent", 800)],
//!     &ChartOptions::default(),
//! )?;
//! assert_eq!(graph.pool_node().amount, Money::from_dollars(1000));
//! # Ok::<(), sankey_budget::SankeyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod flow;
pub mod import;
pub mod models;
pub mod render;
pub mod tui;

pub use error::{SankeyError, SankeyResult};
