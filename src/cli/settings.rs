//! Settings CLI commands

use clap::Subcommand;

use crate::config::{DateFormat, Settings, Theme};
use crate::display::format::{format_currency, format_date};
use crate::error::CasherResult;
use crate::models::Money;
use crate::services::{SettingsChanges, SettingsService};
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show current preferences
    Show,

    /// Change preferences
    Set {
        /// Theme: light or dark
        #[arg(long)]
        theme: Option<Theme>,
        /// Currency code, e.g. USD, GBP, EUR, NGN
        #[arg(long)]
        currency: Option<String>,
        /// Date format: MM/DD/YYYY, DD/MM/YYYY or YYYY-MM-DD
        #[arg(long)]
        date_format: Option<DateFormat>,
    },
}

fn format_settings(settings: &Settings) -> String {
    let sample_date = chrono::NaiveDate::from_ymd_opt(2025, 1, 28).unwrap_or_default();
    let mut output = String::new();
    output.push_str(&format!("Theme:       {}\n", settings.theme));
    output.push_str(&format!(
        "Currency:    {} (e.g. {})\n",
        settings.currency,
        format_currency(Money::from_cents(123456), &settings.currency)
    ));
    output.push_str(&format!(
        "Date format: {} (e.g. {})\n",
        settings.date_format,
        format_date(sample_date, settings.date_format)
    ));
    output
}

/// Handle a settings command
pub fn handle_settings_command(storage: &Storage, cmd: SettingsCommands) -> CasherResult<()> {
    let service = SettingsService::new(storage);

    match cmd {
        SettingsCommands::Show => {
            print!("{}", format_settings(&service.get()?));
        }

        SettingsCommands::Set {
            theme,
            currency,
            date_format,
        } => {
            if theme.is_none() && currency.is_none() && date_format.is_none() {
                println!("No changes specified.");
                return Ok(());
            }
            let updated = service.update(SettingsChanges {
                theme,
                currency,
                date_format,
            })?;
            println!("Settings updated.");
            print!("{}", format_settings(&updated));
        }
    }

    Ok(())
}

/// Handle the clear command
pub fn handle_clear_command(storage: &Storage, yes: bool) -> CasherResult<()> {
    if !yes {
        println!("This removes all expenses and custom categories. It cannot be undone.");
        println!("Run again with --yes to confirm.");
        return Ok(());
    }

    let summary = SettingsService::new(storage).clear_all()?;
    println!(
        "Data cleared: {} expense(s) and {} custom categor{} removed. Settings were kept.",
        summary.expenses_removed,
        summary.categories_removed,
        if summary.categories_removed == 1 { "y" } else { "ies" }
    );
    Ok(())
}
