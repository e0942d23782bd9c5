use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use casher::cli::{
    handle_ai_command, handle_audit_command, handle_category_command, handle_clear_command,
    handle_config_command, handle_dashboard_command, handle_expense_command,
    handle_export_command, handle_import_command, handle_report_command,
    handle_settings_command, AiCommands, CategoryCommands, ExpenseCommands, SettingsCommands,
};
use casher::config::paths::CasherPaths;
use casher::storage::Storage;

#[derive(Parser)]
#[command(
    name = "casher",
    version,
    about = "Track your expenses from the terminal",
    long_about = "Casher records your expenses, groups them by category and \
                  summarizes your spending with a dashboard and monthly reports. \
                  Optional AI features suggest categories and spending tips."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Display preferences
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Show totals and recent activity
    Dashboard,

    /// Show the spending report for a month
    Report {
        /// Month to report on (YYYY-MM, default: current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Write the report as CSV to this file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export expenses to CSV
    Export {
        /// Output file ("-" for stdout, default: casher-expenses.csv)
        path: Option<String>,
    },

    /// Import expenses from a CSV export
    Import {
        /// Path to CSV file
        path: PathBuf,
        /// Import rows even if an identical expense already exists
        #[arg(long)]
        allow_duplicates: bool,
    },

    /// Remove all expenses and custom categories (settings are kept)
    Clear {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// AI-assisted categorization and insights
    #[command(subcommand)]
    Ai(AiCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let paths = CasherPaths::new()?;
    let storage = Storage::open(paths)?;

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Settings(cmd)) => handle_settings_command(&storage, cmd)?,
        Some(Commands::Dashboard) => handle_dashboard_command(&storage)?,
        Some(Commands::Report { month, output }) => {
            handle_report_command(&storage, month.as_deref(), output.as_deref())?
        }
        Some(Commands::Export { path }) => handle_export_command(&storage, path.as_deref())?,
        Some(Commands::Import {
            path,
            allow_duplicates,
        }) => handle_import_command(&storage, &path, allow_duplicates)?,
        Some(Commands::Clear { yes }) => handle_clear_command(&storage, yes)?,
        Some(Commands::Ai(cmd)) => handle_ai_command(&storage, cmd)?,
        Some(Commands::Audit { count }) => handle_audit_command(&storage, count)?,
        Some(Commands::Config) => handle_config_command(&storage)?,
        None => {
            handle_dashboard_command(&storage)?;
            println!();
            println!("Run 'casher --help' for usage information.");
        }
    }

    Ok(())
}
