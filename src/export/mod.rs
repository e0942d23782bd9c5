//! Export module for Casher
//!
//! CSV backup of the expense collection.

pub mod csv;

pub use self::csv::{export_expenses_csv, expenses_to_csv, CSV_HEADER, DEFAULT_EXPORT_FILE};
