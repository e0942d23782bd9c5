//! Dashboard and report CLI commands

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{today, use_color};
use crate::error::{CasherError, CasherResult};
use crate::models::Month;
use crate::reports::{DashboardSummary, SpendingReport};
use crate::services::{ExpenseService, SettingsService};
use crate::storage::Storage;

/// Handle the dashboard command
pub fn handle_dashboard_command(storage: &Storage) -> CasherResult<()> {
    let expenses = ExpenseService::new(storage).list()?;
    let settings = SettingsService::new(storage).get()?;
    let today = today();

    let summary = DashboardSummary::generate(&expenses, today);
    print!("{}", summary.format_terminal(&settings, today, use_color()));
    Ok(())
}

/// Handle the report command
pub fn handle_report_command(
    storage: &Storage,
    month: Option<&str>,
    output: Option<&Path>,
) -> CasherResult<()> {
    let month = match month {
        Some(m) => Month::parse(m).map_err(|e| CasherError::Validation(e.to_string()))?,
        None => Month::of(today()),
    };

    let expenses = ExpenseService::new(storage).list()?;
    let report = SpendingReport::generate(&expenses, month);

    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CasherError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            report.export_csv(&mut writer)?;
            writer
                .flush()
                .map_err(|e| CasherError::Export(e.to_string()))?;
            println!("Report for {} written to {}", month, path.display());
        }
        None => {
            let settings = SettingsService::new(storage).get()?;
            print!("{}", report.format_terminal(&settings, use_color()));
        }
    }

    Ok(())
}
