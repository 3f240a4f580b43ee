//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the flow builder and renderers.

pub mod chart;
pub mod check;

pub use chart::{handle_demo_command, handle_render_command, ChartArgs, DemoArgs, RenderArgs};
pub use check::{handle_check_command, CheckArgs};
