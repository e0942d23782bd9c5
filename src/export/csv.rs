//! CSV Export functionality
//!
//! Writes the expense collection in the backup format that `import` reads
//! back: `id,amount,description,category,date`, one row per expense in
//! collection order. The `id` column is the 1-based row number.

use std::io::Write;

use crate::error::{CasherError, CasherResult};
use crate::models::Expense;

/// Suggested file name for an export
pub const DEFAULT_EXPORT_FILE: &str = "casher-expenses.csv";

/// Header row of the export
pub const CSV_HEADER: &str = "id,amount,description,category,date";

/// Render expenses as CSV. Rows are joined with `\n`; there is no trailing
/// newline.
pub fn expenses_to_csv(expenses: &[Expense]) -> String {
    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for (index, expense) in expenses.iter().enumerate() {
        lines.push(format!(
            "{},{},{},{},{}",
            index + 1,
            expense.amount.to_plain_string(),
            quote(&expense.description),
            expense.category,
            expense.date_key()
        ));
    }

    lines.join("\n")
}

/// Write the export to `writer`
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> CasherResult<()> {
    writer
        .write_all(expenses_to_csv(expenses).as_bytes())
        .map_err(|e| CasherError::Export(e.to_string()))?;
    writer
        .flush()
        .map_err(|e| CasherError::Export(e.to_string()))
}

/// Always quote, doubling any embedded quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn coffee() -> Expense {
        Expense::new(
            Money::from_cents(1250),
            "Coffee, \"large\"",
            "Food",
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        )
    }

    #[test]
    fn test_single_row() {
        let csv = expenses_to_csv(&[coffee()]);
        assert_eq!(
            csv,
            "id,amount,description,category,date\n1,12.5,\"Coffee, \"\"large\"\"\",Food,2025-01-05"
        );
    }

    #[test]
    fn test_empty_is_header_only() {
        assert_eq!(expenses_to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn test_rows_in_collection_order() {
        let rent = Expense::new(
            Money::from_cents(100000),
            "Rent",
            "Bills",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        );
        let csv = expenses_to_csv(&[rent, coffee()]);
        let lines: Vec<_> = csv.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "1,1000,\"Rent\",Bills,2025-01-01");
        assert!(lines[2].starts_with("2,12.5,"));
    }

    #[test]
    fn test_export_writes_bytes() {
        let mut buf = Vec::new();
        export_expenses_csv(&[coffee()], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.ends_with('\n'));
        assert!(text.ends_with("Food,2025-01-05"));
    }
}
