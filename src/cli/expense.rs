//! Expense CLI commands

use clap::Subcommand;

use super::{ai::suggest_category, today};
use crate::config::AiConfig;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{CasherError, CasherResult};
use crate::models::{ExpenseInput, Month};
use crate::services::{ExpenseChanges, ExpenseService, SettingsService};
use crate::storage::Storage;

/// Category used when none is given and no suggestion is requested
const DEFAULT_FORM_CATEGORY: &str = "Food";

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the money was spent on
        description: String,
        /// Category name (default: Food)
        #[arg(short, long, conflicts_with = "suggest")]
        category: Option<String>,
        /// Date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
        /// Ask the AI assistant to pick the category
        #[arg(long)]
        suggest: bool,
    },

    /// List expenses, newest first
    List {
        /// Maximum number of expenses to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
        /// Only expenses in this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Only expenses in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show one expense
    Show {
        /// Expense ID (full or short form)
        id: String,
    },

    /// Edit an expense
    Edit {
        /// Expense ID (full or short form)
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (full or short form)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> CasherResult<()> {
    let service = ExpenseService::new(storage);
    let settings = SettingsService::new(storage).get()?;

    match cmd {
        ExpenseCommands::Add {
            amount,
            description,
            category,
            date,
            suggest,
        } => {
            let category = match category {
                Some(category) => category,
                None if suggest => {
                    let suggested = suggest_category(&AiConfig::from_env(), &description)?;
                    println!("Suggested category: {}", suggested);
                    suggested
                }
                None => DEFAULT_FORM_CATEGORY.to_string(),
            };

            let input = ExpenseInput {
                amount,
                description,
                category,
                date: date.unwrap_or_default(),
            };
            let expense = service.create(&input, today())?;

            println!("Added expense: {}", expense.id);
            print!("{}", format_expense_details(&expense, &settings));
        }

        ExpenseCommands::List {
            limit,
            month,
            category,
        } => {
            let mut expenses = service.list()?;

            if let Some(month) = month {
                let month = Month::parse(&month)
                    .map_err(|e| CasherError::Validation(e.to_string()))?;
                expenses.retain(|e| month.contains(e.date));
            }
            if let Some(category) = category {
                let category = category.trim();
                expenses.retain(|e| e.category == category);
            }
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            println!("{}", format_expense_table(&expenses, &settings));
        }

        ExpenseCommands::Show { id } => {
            let expense = service.get(&id)?;
            print!("{}", format_expense_details(&expense, &settings));
        }

        ExpenseCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
        } => {
            let changes = ExpenseChanges {
                amount,
                description,
                category,
                date,
            };
            if changes.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let expense = service.edit(&id, &changes, today())?;
            println!("Updated expense: {}", expense.id);
            print!("{}", format_expense_details(&expense, &settings));
        }

        ExpenseCommands::Delete { id } => {
            let expense = service.delete(&id)?;
            println!(
                "Deleted expense: {} ({})",
                expense.id, expense.description
            );
        }
    }

    Ok(())
}
