//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod ai;
pub mod audit;
pub mod category;
pub mod expense;
pub mod export;
pub mod report;
pub mod settings;

pub use ai::{handle_ai_command, AiCommands};
pub use audit::{handle_audit_command, handle_config_command};
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, handle_import_command};
pub use report::{handle_dashboard_command, handle_report_command};
pub use settings::{handle_clear_command, handle_settings_command, SettingsCommands};

use std::io::IsTerminal;

use chrono::NaiveDate;

/// Today's date in local time
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Whether to color terminal output: stdout is a terminal and `NO_COLOR`
/// is unset
pub fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}
