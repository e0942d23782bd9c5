//! Expense model
//!
//! A single recorded spending event. Expenses are created from an
//! [`ExpenseInput`] after validation, edited in place (keeping their ID) and
//! removed by delete.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{CasherError, CasherResult};

/// Date format used for storage and input
pub const ISO_DATE: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    /// Non-negative amount
    pub amount: Money,

    pub description: String,

    pub category: String,

    /// Calendar date, no time component
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with a freshly generated ID
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            description: description.into(),
            category: category.into(),
            date,
        }
    }

    /// Date in the zero-padded storage form, e.g. "2025-01-05"
    pub fn date_key(&self) -> String {
        self.date.format(ISO_DATE).to_string()
    }
}

/// Unvalidated expense fields as submitted by the user
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub amount: String,
    pub description: String,
    pub category: String,
    /// "YYYY-MM-DD"; empty means today
    pub date: String,
}

/// Expense fields that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidExpense {
    pub amount: Money,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

impl ExpenseInput {
    /// Validate the submitted fields.
    ///
    /// Amount and description are required. `today` fills in an empty date.
    pub fn validate(&self, today: NaiveDate) -> CasherResult<ValidExpense> {
        let amount_str = self.amount.trim();
        if amount_str.is_empty() {
            return Err(CasherError::Validation("Amount is required".into()));
        }
        let amount = Money::parse(amount_str)
            .map_err(|e| CasherError::Validation(e.to_string()))?;
        if amount.is_negative() {
            return Err(CasherError::Validation(
                "Amount cannot be negative".into(),
            ));
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(CasherError::Validation("Description is required".into()));
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(CasherError::Validation("Category is required".into()));
        }

        let date = parse_date(&self.date)?.unwrap_or(today);

        Ok(ValidExpense {
            amount,
            description: description.to_string(),
            category: category.to_string(),
            date,
        })
    }
}

/// Parse an optional "YYYY-MM-DD" date; blank input yields `None`
pub fn parse_date(s: &str) -> CasherResult<Option<NaiveDate>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, ISO_DATE)
        .map(Some)
        .map_err(|_| CasherError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 28).unwrap()
    }

    fn input(amount: &str, description: &str, date: &str) -> ExpenseInput {
        ExpenseInput {
            amount: amount.into(),
            description: description.into(),
            category: "Food".into(),
            date: date.into(),
        }
    }

    #[test]
    fn test_valid_input() {
        let valid = input("12.50", "  Lunch ", "2025-01-05").validate(today()).unwrap();
        assert_eq!(valid.amount.cents(), 1250);
        assert_eq!(valid.description, "Lunch");
        assert_eq!(valid.date, NaiveDate::from_ymd_opt(2025, 1, 5).unwrap());
    }

    #[test]
    fn test_empty_date_defaults_to_today() {
        let valid = input("3", "Bus", "").validate(today()).unwrap();
        assert_eq!(valid.date, today());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(input("", "Lunch", "").validate(today()).unwrap_err().is_validation());
        assert!(input("5", "   ", "").validate(today()).unwrap_err().is_validation());
        assert!(input("five", "Lunch", "").validate(today()).is_err());
        assert!(input("-5", "Lunch", "").validate(today()).is_err());
        assert!(input("5", "Lunch", "05/01/2025").validate(today()).is_err());
    }

    #[test]
    fn test_amount_above_limit_rejected() {
        let err = input("90000000000000000", "Island", "")
            .validate(today())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("too large"));
        assert!(input("1000000000000", "Island", "").validate(today()).is_ok());
    }

    #[test]
    fn test_wire_format() {
        let id: ExpenseId = "550e8400-e29b-41d4-a716-446655440000".parse().unwrap();
        let expense = Expense {
            id,
            amount: Money::from_cents(1250),
            description: "Coffee".into(),
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "amount": 12.5,
                "description": "Coffee",
                "category": "Food",
                "date": "2025-01-05"
            })
        );
        assert_eq!(expense.date_key(), "2025-01-05");
    }
}
