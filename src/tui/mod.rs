//! Terminal User Interface module
//!
//! An interactive budget form built on ratatui: income sources and expense
//! categories are entered in two lists, the chart title and colors in a
//! dialog, and `g` builds the flow graph, reports its consistency as
//! notifications and writes an HTML chart.

pub mod app;
pub mod dialogs;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_form;
