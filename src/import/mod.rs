//! Budget document loading
//!
//! Reads a `BudgetDocument` from YAML, JSON or CSV. The format comes from the
//! file extension; unknown extensions are tried as YAML, which also accepts
//! JSON.

pub mod csv;

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SankeyError, SankeyResult};
use crate::models::BudgetDocument;

pub use self::csv::parse_csv;

/// Supported budget document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
    Csv,
}

impl DocumentFormat {
    /// Guess the format from a path's extension
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Self::Json,
            Some("csv") => Self::Csv,
            _ => Self::Yaml,
        }
    }
}

/// Parse a budget document from text in the given format
pub fn parse_budget(contents: &str, format: DocumentFormat) -> SankeyResult<BudgetDocument> {
    let document = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(contents)?,
        DocumentFormat::Json => serde_json::from_str(contents)?,
        DocumentFormat::Csv => parse_csv(contents.as_bytes())?,
    };
    Ok(document)
}

/// Load a budget document from a file
pub fn load_budget<P: AsRef<Path>>(path: P) -> SankeyResult<BudgetDocument> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .map_err(|e| SankeyError::Import(format!("Failed to read {}: {}", path.display(), e)))?;

    let format = DocumentFormat::from_path(path);
    let document = parse_budget(&contents, format)?;
    debug!(
        path = %path.display(),
        ?format,
        incomes = document.incomes.len(),
        expenses = document.expenses.len(),
        "loaded budget document"
    );
    Ok(document)
}
