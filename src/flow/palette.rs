//! Color palettes for income and expense categories
//!
//! Colors are handed out by entry index, wrapping around when there are more
//! entries than colors.

use serde::{Deserialize, Serialize};

use crate::error::SankeyError;

/// Plotly's qualitative Pastel1 palette (used for income sources)
pub const PASTEL1: [&str; 9] = [
    "rgb(251,180,174)",
    "rgb(179,205,227)",
    "rgb(204,235,197)",
    "rgb(222,203,228)",
    "rgb(254,217,166)",
    "rgb(255,255,204)",
    "rgb(229,216,189)",
    "rgb(253,218,236)",
    "rgb(242,242,242)",
];

/// Plotly's qualitative Pastel2 palette (used for expense categories)
pub const PASTEL2: [&str; 8] = [
    "rgb(179,226,205)",
    "rgb(253,205,172)",
    "rgb(203,213,232)",
    "rgb(244,202,228)",
    "rgb(230,245,201)",
    "rgb(255,242,174)",
    "rgb(241,226,204)",
    "rgb(204,204,204)",
];

/// Node fill for the income column
pub const INCOME_FILL: &str = "#a6cee3";

/// Node fill for the Budget pool
pub const DEFAULT_POOL_COLOR: &str = "#98df8a";

/// Node fill for the expense column
pub const EXPENSE_FILL: &str = "#ffbb78";

/// An ordered, non-empty sequence of colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Create a palette; fails if `colors` is empty
    pub fn new(colors: Vec<String>) -> Result<Self, SankeyError> {
        if colors.is_empty() {
            return Err(SankeyError::Config("A palette needs at least one color".into()));
        }
        Ok(Self { colors })
    }

    pub fn pastel1() -> Self {
        Self {
            colors: PASTEL1.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn pastel2() -> Self {
        Self {
            colors: PASTEL2.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// Color for the entry at `index`
    pub fn color_at(&self, index: usize) -> &str {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = SankeyError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_palette_rejected() {
        assert!(Palette::new(Vec::new()).is_err());
    }

    #[test]
    fn test_color_cycles() {
        let palette = Palette::new(vec!["red".into(), "green".into(), "blue".into()]).unwrap();
        let colors: Vec<_> = (0..7).map(|i| palette.color_at(i)).collect();
        assert_eq!(
            colors,
            vec!["red", "green", "blue", "red", "green", "blue", "red"]
        );
    }

    #[test]
    fn test_builtin_palettes() {
        assert_eq!(Palette::pastel1().len(), 9);
        assert_eq!(Palette::pastel2().len(), 8);
        assert_eq!(Palette::pastel2().color_at(8), PASTEL2[0]);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let result: Result<Palette, _> = serde_json::from_str("[]");
        assert!(result.is_err());
        let palette: Palette = serde_json::from_str(r##"["#000"]"##).unwrap();
        assert_eq!(palette.color_at(5), "#000");
    }
}
