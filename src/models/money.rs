//! Money type for budget amounts
//!
//! Amounts are held as whole cents so totals and the income/expense
//! comparison are exact. Chart values are converted to `f64` only at the
//! rendering edge.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use thiserror::Error;

/// A currency amount in cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

/// Why a string could not be read as an amount
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyParseError {
    #[error("Amount is empty")]
    Empty,

    #[error("Invalid amount: '{0}'")]
    Invalid(String),
}

impl Money {
    /// Create an amount from cents
    ///
    /// ```
    /// use sankey_budget::models::Money;
    /// assert_eq!(Money::from_cents(39_360).to_string(), "$393.60");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
    }

    /// Round a decimal dollar amount to the nearest cent
    ///
    /// `None` for NaN, infinities and values too large for i64 cents.
    pub fn from_f64(dollars: f64) -> Option<Self> {
        let cents = (dollars * 100.0).round();
        (cents.is_finite() && cents >= i64::MIN as f64 && cents <= i64::MAX as f64)
            .then(|| Self(cents as i64))
    }

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Whole dollars, truncated toward zero
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Sum that reports overflow instead of wrapping
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Dollars as a float, for chart values
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Read an amount the way people type it
    ///
    /// Accepts an optional leading `-` and `$`, comma thousands separators
    /// and decimals: `"1200"`, `"$1,200.50"`, `".75"`, `"-3.5"`. Amounts are
    /// rounded half away from zero to the cent, like [`Money::from_f64`].
    pub fn parse(input: &str) -> Result<Self, MoneyParseError> {
        let trimmed = input.trim();
        let invalid = || MoneyParseError::Invalid(trimmed.to_string());

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");
        if rest.is_empty() {
            return Err(if trimmed.is_empty() {
                MoneyParseError::Empty
            } else {
                invalid()
            });
        }

        let (whole, fraction) = rest.split_once('.').unwrap_or((rest.as_str(), ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(whole) || !all_digits(fraction) || (whole.is_empty() && fraction.is_empty())
        {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let mut digits = fraction.bytes().chain(std::iter::repeat(b'0'));
        let mut cents = 0i64;
        for b in digits.by_ref().take(2) {
            cents = cents * 10 + i64::from(b - b'0');
        }
        if digits.next().is_some_and(|b| b >= b'5') {
            cents += 1;
        }

        let total = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;
        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with a symbol and thousands separators, e.g. `$1,200.00`
    pub fn format_grouped(&self, symbol: &str) -> String {
        let digits = self.dollars().unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}.{:02}", sign, symbol, grouped, (self.0 % 100).abs())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_grouped("$"))
    }
}

// Operators saturate at the i64 cent range; use `checked_add` where an
// out-of-range total must be reported.
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_f64_rounds_to_cents() {
        assert_eq!(Money::from_f64(393.60), Some(Money::from_cents(39_360)));
        assert_eq!(Money::from_f64(136.92), Some(Money::from_cents(13_692)));
        assert_eq!(Money::from_f64(0.005), Some(Money::from_cents(1)));
        assert_eq!(Money::from_f64(f64::NAN), None);
        assert_eq!(Money::from_f64(f64::INFINITY), None);
        assert_eq!(Money::from_f64(1e30), None);
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_cents(1050).to_string(), "$10.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        assert_eq!(Money::from_dollars(1200).to_string(), "$1,200.00");
        assert_eq!(Money::from_dollars(165_000).to_string(), "$165,000.00");
        assert_eq!(Money::from_cents(-123_456_789).to_string(), "-$1,234,567.89");
        assert_eq!(Money::from_dollars(1200).format_grouped("€"), "€1,200.00");
    }

    #[test]
    fn test_parse_typed_amounts() {
        let cases = [
            ("1200", 120_000),
            ("$1,200.50", 120_050),
            ("  10.5 ", 1_050),
            (".75", 75),
            ("3.", 300),
            ("-3.5", -350),
            ("-$0.05", -5),
            ("1.999", 200),
            ("1.994", 199),
            ("0.005", 1),
            ("-0.005", -1),
        ];
        for (input, cents) in cases {
            assert_eq!(Money::parse(input), Ok(Money::from_cents(cents)), "{}", input);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse("   "), Err(MoneyParseError::Empty));
        for input in ["$", ".", "abc", "1.2.3", "1.x", "1e3", "--5"] {
            assert!(
                matches!(Money::parse(input), Err(MoneyParseError::Invalid(_))),
                "{}",
                input
            );
        }
    }

    #[test]
    fn test_totals() {
        let amounts = [Money::from_dollars(165_000), Money::from_dollars(7_200)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_dollars(172_200));
        assert_eq!((total - Money::from_dollars(200_000)).dollars(), -27_800);
        assert!(!total.is_zero());
    }

    #[test]
    fn test_parse_agrees_with_float_amounts() {
        for text in ["1.999", "393.60", "0.125", "12.3456"] {
            let number: f64 = text.parse().unwrap();
            assert_eq!(Money::parse(text).ok(), Money::from_f64(number), "{}", text);
        }
    }

    #[test]
    fn test_arithmetic_near_limits() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(1).checked_add(Money::from_cents(2)),
            Some(Money::from_cents(3))
        );
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(Money::from_cents(i64::MIN) - max, Money::from_cents(i64::MIN));

        let total: Money = [max, max].iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_serializes_as_cents() {
        let json = serde_json::to_string(&Money::from_cents(1050)).unwrap();
        assert_eq!(json, "1050");
    }
}
