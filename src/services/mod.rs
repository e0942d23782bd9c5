//! Business logic layer for Casher
//!
//! Services borrow the [`Storage`](crate::storage::Storage), validate
//! input, apply the change through a single state update and record it in
//! the audit log.

pub mod category;
pub mod expense;
pub mod import;
pub mod settings;

pub use category::CategoryService;
pub use expense::{ExpenseChanges, ExpenseService};
pub use import::{ColumnMapping, ImportResult, ImportService, ParsedRow};
pub use settings::{ClearSummary, SettingsChanges, SettingsService};
