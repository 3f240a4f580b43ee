//! Custom error types for sankey-budget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for sankey-budget operations
#[derive(Error, Debug)]
pub enum SankeyError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for budget input
    #[error("Validation error: {0}")]
    Validation(String),

    /// A label appears more than once on the same side of the budget
    #[error("Duplicate {side} label: {label}")]
    DuplicateLabel { side: &'static str, label: String },

    /// One side of the budget has no entries
    #[error("Please enter at least one {0}.")]
    EmptyInput(&'static str),

    /// Budget document import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Chart rendering errors
    #[error("Render error: {0}")]
    Render(String),

    /// Export (writing rendered output) errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SankeyError {
    /// Check if this is a validation error of any kind
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::DuplicateLabel { .. } | Self::EmptyInput(_)
        )
    }
}

impl From<std::io::Error> for SankeyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SankeyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SankeyError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for SankeyError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for sankey-budget operations
pub type SankeyResult<T> = Result<T, SankeyError>;
