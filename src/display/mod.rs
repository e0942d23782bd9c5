//! Display formatting for terminal output
//!
//! Currency and date formatting, the category color table, and the table
//! and chart renderings the CLI prints.

pub mod category;
pub mod expense;
pub mod format;
pub mod palette;
pub mod report;

pub use category::format_category_list;
pub use expense::{format_expense_details, format_expense_table};
pub use format::{format_currency, format_date, relative_date_label};
pub use palette::{chart_color, style_for, CategoryStyle};
