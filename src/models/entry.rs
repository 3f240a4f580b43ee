//! Labelled budget amounts
//!
//! A `NamedAmount` is one income source or one expense category. Budget
//! documents describe a side of the budget either as an ordered mapping
//! (`Rent: 1200`) or as a list of `{label, amount}` records; both shapes
//! deserialize into `Vec<NamedAmount>` in document order.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::money::Money;

/// One labelled amount on either side of the budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedAmount {
    pub label: String,
    #[serde(
        serialize_with = "serialize_dollars",
        deserialize_with = "deserialize_dollars"
    )]
    pub amount: Money,
}

impl NamedAmount {
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }

    /// Convenience constructor from whole currency units
    pub fn dollars(label: impl Into<String>, dollars: i64) -> Self {
        Self::new(label, Money::from_dollars(dollars))
    }
}

/// Sum the amounts of a slice of entries, saturating at the `Money` range
pub fn total(entries: &[NamedAmount]) -> Money {
    entries.iter().map(|e| e.amount).sum()
}

/// Sum the amounts, or `None` if the total does not fit in `Money`
pub fn checked_total(entries: &[NamedAmount]) -> Option<Money> {
    entries
        .iter()
        .try_fold(Money::zero(), |acc, e| acc.checked_add(e.amount))
}

fn serialize_dollars<S>(amount: &Money, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(amount.as_f64())
}

fn deserialize_dollars<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AmountVisitor)
}

/// Accepts integers, floats, and currency strings such as `"$1,200.50"`
struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a currency string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(100)
            .map(Money::from_cents)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        i64::try_from(v)
            .ok()
            .and_then(|v| v.checked_mul(100))
            .map(Money::from_cents)
            .ok_or_else(|| E::custom(format!("amount out of range: {}", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_f64(v).ok_or_else(|| E::custom(format!("invalid amount: {}", v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        Money::parse(v).map_err(E::custom)
    }
}

/// Wrapper so map values can be deserialized with `AmountVisitor`
struct Amount(Money);

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AmountVisitor).map(Amount)
    }
}

/// Deserialize one side of a budget from a mapping or a list, keeping order
///
/// Repeated mapping keys are kept as separate entries so that validation can
/// report them instead of silently dropping one.
pub fn deserialize_entries<'de, D>(deserializer: D) -> Result<Vec<NamedAmount>, D::Error>
where
    D: Deserializer<'de>,
{
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<NamedAmount>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a mapping of label to amount or a list of {label, amount}")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((label, Amount(amount))) = map.next_entry::<String, Amount>()? {
                entries.push(NamedAmount { label, amount });
            }
            Ok(entries)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(entry) = seq.next_element::<NamedAmount>()? {
                entries.push(entry);
            }
            Ok(entries)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(EntriesVisitor)
}
