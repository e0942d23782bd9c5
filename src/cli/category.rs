//! Category CLI commands

use clap::Subcommand;

use super::use_color;
use crate::display::format_category_list;
use crate::error::CasherResult;
use crate::reports::aggregate::by_category;
use crate::services::{CategoryService, ExpenseService, SettingsService};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories with their spending so far
    List,

    /// Add a new category
    Add {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> CasherResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            let totals = by_category(&ExpenseService::new(storage).list()?);
            let currency = SettingsService::new(storage).get()?.currency;
            print!(
                "{}",
                format_category_list(&categories, &totals, &currency, use_color())
            );
        }

        CategoryCommands::Add { name } => {
            let added = service.add(&name)?;
            println!("Added category: {}", added);
        }
    }

    Ok(())
}
