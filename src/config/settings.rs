//! User settings for sankey-budget
//!
//! Manages chart defaults (title, palettes, node fill), input policies and
//! the preferred output format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::paths::SankeyPaths;
use crate::error::SankeyError;
use crate::flow::palette::{Palette, DEFAULT_POOL_COLOR, PASTEL1, PASTEL2};
use crate::flow::{ChartOptions, DuplicateLabelPolicy, EmptyInputPolicy, FlowGraphBuilder, NodeFill};
use crate::models::BudgetDocument;
use crate::render::OutputFormat;

/// User settings for sankey-budget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in node labels
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Title used when a budget document does not name one
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Title color used when a budget document does not name one
    #[serde(default = "default_title_color")]
    pub default_title_color: String,

    /// Colors cycled through for income sources, in order
    #[serde(default = "default_income_palette")]
    pub income_palette: Vec<String>,

    /// Colors cycled through for expense categories, in order
    #[serde(default = "default_expense_palette")]
    pub expense_palette: Vec<String>,

    /// Color of the Budget pool node
    #[serde(default = "default_pool_color")]
    pub pool_color: String,

    /// How nodes are filled by the renderer
    #[serde(default)]
    pub node_fill: NodeFill,

    /// What to do when incomes or expenses are empty
    #[serde(default)]
    pub empty_inputs: EmptyInputPolicy,

    /// What to do when a label repeats on one side
    #[serde(default)]
    pub duplicate_labels: DuplicateLabelPolicy,

    /// Output format used when none is given on the command line
    #[serde(default)]
    pub default_format: OutputFormat,

    /// Layout overrides applied to every chart before per-document overrides
    #[serde(default)]
    pub default_layout: Map<String, Value>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_title() -> String {
    "Budget Sankey Diagram".to_string()
}

fn default_title_color() -> String {
    "black".to_string()
}

fn default_income_palette() -> Vec<String> {
    PASTEL1.iter().map(|c| c.to_string()).collect()
}

fn default_expense_palette() -> Vec<String> {
    PASTEL2.iter().map(|c| c.to_string()).collect()
}

fn default_pool_color() -> String {
    DEFAULT_POOL_COLOR.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_title: default_title(),
            default_title_color: default_title_color(),
            income_palette: default_income_palette(),
            expense_palette: default_expense_palette(),
            pool_color: default_pool_color(),
            node_fill: NodeFill::default(),
            empty_inputs: EmptyInputPolicy::default(),
            duplicate_labels: DuplicateLabelPolicy::default(),
            default_format: OutputFormat::default(),
            default_layout: Map::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SankeyPaths) -> Result<Self, SankeyError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SankeyError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SankeyError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SankeyPaths) -> Result<(), SankeyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SankeyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SankeyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the builder cannot work with
    pub fn validate(&self) -> Result<(), SankeyError> {
        if self.income_palette.is_empty() {
            return Err(SankeyError::Config("income_palette must not be empty".into()));
        }
        if self.expense_palette.is_empty() {
            return Err(SankeyError::Config("expense_palette must not be empty".into()));
        }
        Ok(())
    }

    /// Build a FlowGraphBuilder configured from these settings
    pub fn builder(&self) -> Result<FlowGraphBuilder, SankeyError> {
        let income = Palette::new(self.income_palette.clone())?;
        let expense = Palette::new(self.expense_palette.clone())?;

        Ok(FlowGraphBuilder::new(income, expense)
            .pool_color(self.pool_color.clone())
            .node_fill(self.node_fill)
            .empty_inputs(self.empty_inputs)
            .duplicate_labels(self.duplicate_labels)
            .currency_symbol(self.currency_symbol.clone()))
    }

    /// Chart options for a document, falling back to these settings
    ///
    /// Layout overrides apply in order: settings defaults, then the document's.
    pub fn chart_options(&self, document: &BudgetDocument) -> ChartOptions {
        let title = document.title.as_deref().unwrap_or(&self.default_title);
        let title_color = document
            .title_color
            .as_deref()
            .unwrap_or(&self.default_title_color);

        ChartOptions::new(title, title_color)
            .with_overrides(&self.default_layout)
            .with_overrides(&document.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_title, "Budget Sankey Diagram");
        assert_eq!(settings.default_title_color, "black");
        assert_eq!(settings.income_palette.len(), 9);
        assert_eq!(settings.expense_palette.len(), 8);
        assert_eq!(settings.empty_inputs, EmptyInputPolicy::Reject);
        assert_eq!(settings.default_format, OutputFormat::Html);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SankeyPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.empty_inputs = EmptyInputPolicy::Allow;
        settings.currency_symbol = "€".into();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.empty_inputs, EmptyInputPolicy::Allow);
        assert_eq!(loaded.currency_symbol, "€");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SankeyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_title": "Household"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_title, "Household");
        assert_eq!(loaded.pool_color, DEFAULT_POOL_COLOR);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SankeyPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"income_palette": []}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, SankeyError::Config(_)));
    }

    #[test]
    fn test_chart_options_fallbacks() {
        let mut settings = Settings::default();
        settings
            .default_layout
            .insert("paper_bgcolor".into(), Value::from("ivory"));
        settings.default_layout.insert("width".into(), Value::from(900));

        let mut doc = BudgetDocument::default();
        doc.title_color = Some("navy".into());
        doc.layout.insert("width".into(), Value::from(1200));

        let options = settings.chart_options(&doc);
        assert_eq!(options.title, "Budget Sankey Diagram");
        assert_eq!(options.title_color, "navy");
        assert_eq!(options.layout_overrides["paper_bgcolor"], "ivory");
        assert_eq!(options.layout_overrides["width"], 1200);
    }
}
