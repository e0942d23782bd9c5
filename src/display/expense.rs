//! Expense display formatting
//!
//! Table and detail views of expenses for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use super::format::{format_currency, format_date};
use crate::config::Settings;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format expenses as a table, in the order given
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses yet. Add one with 'casher expense add'.".to_string();
    }

    let rows = expenses.iter().map(|e| ExpenseRow {
        id: e.id.short(),
        date: format_date(e.date, settings.date_format),
        description: e.description.clone(),
        category: e.category.clone(),
        amount: format_currency(e.amount, &settings.currency),
    });

    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::last()).with(Alignment::right()))
        .to_string()
}

/// Format a single expense for display
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(expense.date, settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_currency(expense.amount, &settings.currency)
    ));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DateFormat;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Expense {
        Expense::new(
            Money::from_cents(123456),
            "Laptop stand",
            "Shopping",
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(),
        )
    }

    #[test]
    fn test_empty_table() {
        let text = format_expense_table(&[], &Settings::default());
        assert!(text.contains("No expenses yet"));
    }

    #[test]
    fn test_table_uses_settings() {
        let expense = sample();
        let settings = Settings {
            currency: "EUR".into(),
            date_format: DateFormat::DayMonthYear,
            ..Settings::default()
        };
        let text = format_expense_table(std::slice::from_ref(&expense), &settings);
        assert!(text.contains("Laptop stand"));
        assert!(text.contains("€1,234.56"));
        assert!(text.contains("09/03/2025"));
        assert!(text.contains(&expense.id.short()));
    }

    #[test]
    fn test_details() {
        let text = format_expense_details(&sample(), &Settings::default());
        assert!(text.contains("Amount:      $1,234.56"));
        assert!(text.contains("Date:        03/09/2025"));
        assert!(text.contains("Category:    Shopping"));
    }
}
