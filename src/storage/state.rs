//! The persisted state record
//!
//! Expenses, categories and settings are stored together as one JSON object
//! and always written as a unit.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::models::{CategorySet, Expense};

/// `{expenses, categories, settings}`
///
/// Each field falls back to its default when absent from the stored record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Newest first
    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub categories: CategorySet,

    #[serde(default)]
    pub settings: Settings,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DateFormat, Theme};

    #[test]
    fn test_empty_object_is_default() {
        let state: AppState = serde_json::from_str("{}").unwrap();
        assert_eq!(state, AppState::default());
        assert!(state.expenses.is_empty());
        assert_eq!(state.categories.len(), 6);
    }

    #[test]
    fn test_partial_record_keeps_present_fields() {
        let json = r#"{
            "expenses": [
                {"id": "550e8400-e29b-41d4-a716-446655440000", "amount": 4.5,
                 "description": "Tea", "category": "Food", "date": "2025-01-05"}
            ],
            "settings": {"theme": "dark", "currency": "GBP", "dateFormat": "DD/MM/YYYY"}
        }"#;
        let state: AppState = serde_json::from_str(json).unwrap();
        assert_eq!(state.expenses.len(), 1);
        assert_eq!(state.expenses[0].amount.cents(), 450);
        assert_eq!(state.categories, CategorySet::default());
        assert_eq!(state.settings.theme, Theme::Dark);
        assert_eq!(state.settings.date_format, DateFormat::DayMonthYear);
    }
}
