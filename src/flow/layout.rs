//! Fixed three-column node placement
//!
//! Incomes sit at x = 0, the Budget pool at x = 0.5 and expenses at x = 1.
//! Within a column of `k` nodes, node `i` sits at `y = (i + 1) / (k + 1)`.

use serde::{Deserialize, Serialize};

/// Vertical position of the Budget pool node
pub const POOL_Y: f64 = 0.5;

/// The column a node belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Income,
    Pool,
    Expense,
}

impl Column {
    /// Horizontal position of the column
    pub fn x(self) -> f64 {
        match self {
            Self::Income => 0.0,
            Self::Pool => 0.5,
            Self::Expense => 1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Pool => "Budget",
            Self::Expense => "Expense",
        }
    }
}

/// Evenly spaced vertical positions for a column of `count` nodes
pub fn column_positions(count: usize) -> Vec<f64> {
    let spacing = 1.0 / (count as f64 + 1.0);
    (0..count).map(|i| (i as f64 + 1.0) * spacing).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_node_is_centered() {
        assert_eq!(column_positions(1), vec![0.5]);
    }

    #[test]
    fn test_positions_strictly_increase_inside_unit_interval() {
        for count in 1..25 {
            let ys = column_positions(count);
            assert_eq!(ys.len(), count);
            assert!(ys.iter().all(|y| *y > 0.0 && *y < 1.0));
            assert!(ys.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_empty_column() {
        assert!(column_positions(0).is_empty());
    }

    #[test]
    fn test_column_x() {
        assert_eq!(Column::Income.x(), 0.0);
        assert_eq!(Column::Pool.x(), 0.5);
        assert_eq!(Column::Expense.x(), 1.0);
    }
}
