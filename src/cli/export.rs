//! CLI command handlers for CSV export and import

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use super::today;
use crate::error::{CasherError, CasherResult};
use crate::export::{export_expenses_csv, DEFAULT_EXPORT_FILE};
use crate::services::{ExpenseService, ImportService};
use crate::storage::Storage;

/// Handle the export command. A path of `-` writes to stdout.
pub fn handle_export_command(storage: &Storage, path: Option<&str>) -> CasherResult<()> {
    let expenses = ExpenseService::new(storage).list()?;
    let path = path.unwrap_or(DEFAULT_EXPORT_FILE);

    if path == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        export_expenses_csv(&expenses, &mut handle)?;
        println!();
        return Ok(());
    }

    let file = File::create(path)
        .map_err(|e| CasherError::Export(format!("Failed to create {}: {}", path, e)))?;
    let mut writer = BufWriter::new(file);
    export_expenses_csv(&expenses, &mut writer)?;

    println!("Exported {} expense(s) to {}", expenses.len(), path);
    Ok(())
}

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    path: &Path,
    allow_duplicates: bool,
) -> CasherResult<()> {
    if !path.exists() {
        return Err(CasherError::Import(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let result = ImportService::new(storage).import_file(path, today(), !allow_duplicates)?;

    println!("Import Complete!");
    println!("  Imported:    {}", result.imported);
    println!("  Skipped:     {}", result.duplicates_skipped);
    if !result.categories_added.is_empty() {
        println!("  New categories: {}", result.categories_added.join(", "));
    }
    Ok(())
}
