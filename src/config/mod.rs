//! Configuration module for sankey-budget
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SankeyPaths;
pub use settings::Settings;
