//! Core data models for Casher
//!
//! Expenses, the category set, money amounts and calendar months.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::{CategorySet, DEFAULT_CATEGORIES, FALLBACK_CATEGORY};
pub use expense::{parse_date, Expense, ExpenseInput, ValidExpense, ISO_DATE};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
