//! Small text helpers for terminal reports

use crate::models::Money;

/// `part` as a percentage of `whole`; `None` when there is nothing to share
pub fn share(part: Money, whole: Money) -> Option<f64> {
    whole
        .is_positive()
        .then(|| part.cents() as f64 * 100.0 / whole.cents() as f64)
}

/// Percentage text: one decimal under 10%, whole numbers above
pub fn format_share(pct: f64) -> String {
    match pct {
        p if p > 0.0 && p < 0.05 => "<0.1%".to_string(),
        p if p < 10.0 => format!("{:.1}%", p),
        p => format!("{:.0}%", p),
    }
}

/// Horizontal bar of `width` cells, scaled so `largest` fills it
pub fn amount_bar(amount: Money, largest: Money, width: usize) -> String {
    if !amount.is_positive() || !largest.is_positive() {
        return " ".repeat(width);
    }

    let ratio = amount.as_f64() / largest.as_f64();
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Center `title` in a line of `width` columns
pub fn centered(title: &str, width: usize) -> String {
    let pad = width.saturating_sub(title.chars().count()) / 2;
    format!("{:pad$}{}", "", title, pad = pad)
}

/// Horizontal rule, heavy for report headers
pub fn rule(width: usize, heavy: bool) -> String {
    let ch = if heavy { "═" } else { "─" };
    ch.repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_of_budget() {
        let budget = Money::from_dollars(1200);
        assert_eq!(share(Money::from_dollars(300), budget), Some(25.0));
        assert_eq!(share(Money::from_dollars(300), Money::zero()), None);
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(0.01), "<0.1%");
        assert_eq!(format_share(0.0), "0.0%");
        assert_eq!(format_share(5.44), "5.4%");
        assert_eq!(format_share(94.4), "94%");
    }

    #[test]
    fn test_amount_bar() {
        let bar = amount_bar(Money::from_dollars(50), Money::from_dollars(100), 10);
        assert_eq!(bar, "█████░░░░░");
        assert_eq!(amount_bar(Money::zero(), Money::from_dollars(100), 3), "   ");
    }

    #[test]
    fn test_centered_and_rules() {
        assert_eq!(centered("Budget", 10), "  Budget");
        assert_eq!(centered("Budget", 3), "Budget");
        assert_eq!(rule(3, true), "═══");
        assert_eq!(rule(2, false), "──");
    }
}
