//! CSV budget documents
//!
//! One row per entry with a `kind,label,amount` header. Rows keep file order
//! within each side; `kind` is `income` or `expense` (case-insensitive).

use std::io::Read;

use ::csv::{ReaderBuilder, Trim};
use serde::Deserialize;

use crate::error::{SankeyError, SankeyResult};
use crate::models::{BudgetDocument, Money, NamedAmount};

/// Header expected on the first line
pub const CSV_HEADER: [&str; 3] = ["kind", "label", "amount"];

#[derive(Debug, Deserialize)]
struct Row {
    kind: String,
    label: String,
    amount: String,
}

/// Parse a CSV budget from any reader
pub fn parse_csv<R: Read>(reader: R) -> SankeyResult<BudgetDocument> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(false)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<&str> = CSV_HEADER
        .iter()
        .copied()
        .filter(|name| !headers.iter().any(|h| h.eq_ignore_ascii_case(name)))
        .collect();
    if !missing.is_empty() {
        return Err(SankeyError::Import(format!(
            "CSV is missing column(s): {}",
            missing.join(", ")
        )));
    }

    let mut document = BudgetDocument::default();
    for (index, result) in csv_reader.deserialize::<Row>().enumerate() {
        let row = result?;
        // Header is line 1
        let line = index + 2;

        let amount = Money::parse(&row.amount).map_err(|e| {
            SankeyError::Import(format!("Line {}: invalid amount '{}': {}", line, row.amount, e))
        })?;
        let entry = NamedAmount::new(row.label, amount);

        match row.kind.to_ascii_lowercase().as_str() {
            "income" => document.incomes.push(entry),
            "expense" => document.expenses.push(entry),
            other => {
                return Err(SankeyError::Import(format!(
                    "Line {}: unknown kind '{}' (expected income or expense)",
                    line, other
                )))
            }
        }
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let data = "\
kind,label,amount
income,Salary,\"$1,000.00\"
expense,Rent,800
income,Gift,200.5
Expense,Food,300
";
        let doc = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(
            doc.incomes,
            vec![
                NamedAmount::dollars("Salary", 1000),
                NamedAmount::new("Gift", Money::from_cents(20050)),
            ]
        );
        assert_eq!(doc.expenses.len(), 2);
        assert_eq!(doc.expenses[1].label, "Food");
    }

    #[test]
    fn test_unknown_kind() {
        let data = "kind,label,amount\nsavings,Roth,100\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Line 2"));
        assert!(err.to_string().contains("savings"));
    }

    #[test]
    fn test_bad_amount() {
        let data = "kind,label,amount\nincome,Salary,lots\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, SankeyError::Import(_)));
    }

    #[test]
    fn test_missing_column() {
        let data = "kind,label\nincome,Salary\n";
        let err = parse_csv(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("amount"));
    }
}
