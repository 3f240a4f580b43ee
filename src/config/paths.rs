//! Path management for sankey-budget
//!
//! ## Path Resolution Order
//!
//! 1. `SANKEY_BUDGET_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/sankey-budget` or `~/.config/sankey-budget`
//! 3. Windows: `%APPDATA%\sankey-budget`

use std::path::PathBuf;

use crate::error::SankeyError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "SANKEY_BUDGET_DATA_DIR";

/// Manages all paths used by sankey-budget
#[derive(Debug, Clone)]
pub struct SankeyPaths {
    base_dir: PathBuf,
}

impl SankeyPaths {
    /// Resolve paths from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if neither the override nor a home/config directory
    /// can be determined.
    pub fn new() -> Result<Self, SankeyError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SankeyPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Directory the interactive form writes charts into
    pub fn charts_dir(&self) -> PathBuf {
        self.base_dir.join("charts")
    }

    /// Default chart path for the interactive form
    pub fn default_chart_file(&self) -> PathBuf {
        self.charts_dir().join("budget-sankey.html")
    }

    /// Ensure the base and charts directories exist
    pub fn ensure_directories(&self) -> Result<(), SankeyError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SankeyError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.charts_dir())
            .map_err(|e| SankeyError::Io(format!("Failed to create charts directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SankeyError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                SankeyError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("sankey-budget"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SankeyError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SankeyError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("sankey-budget"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SankeyPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.charts_dir(), temp_dir.path().join("charts"));
        assert_eq!(
            paths.default_chart_file(),
            temp_dir.path().join("charts").join("budget-sankey.html")
        );
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        env::set_var(DATA_DIR_ENV, custom_path);
        let paths = SankeyPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
        env::remove_var(DATA_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SankeyPaths::with_base_dir(temp_dir.path().join("nested"));

        assert!(!paths.is_initialized());
        paths.ensure_directories().unwrap();
        assert!(paths.charts_dir().exists());
    }
}
