//! AI assistant CLI commands
//!
//! The rest of the CLI is synchronous; each AI command runs its request on
//! a short-lived single-threaded tokio runtime.

use std::future::Future;

use chrono::Utc;
use clap::Subcommand;

use crate::ai::{self, InsightsOutcome, OpenAiClient};
use crate::config::AiConfig;
use crate::error::{CasherError, CasherResult};
use crate::services::{ExpenseService, SettingsService};
use crate::storage::Storage;

/// AI subcommands
#[derive(Subcommand)]
pub enum AiCommands {
    /// Suggest a category for an expense description
    Categorize {
        /// Expense description, e.g. "Uber to the airport"
        text: String,
    },

    /// Generate spending tips from your expenses
    Insights,
}

fn block_on<F: Future>(future: F) -> CasherResult<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CasherError::Ai(format!("Failed to start async runtime: {}", e)))?;
    Ok(runtime.block_on(future))
}

fn warn_if_offline(config: &AiConfig) {
    if !config.has_credentials() {
        eprintln!(
            "Note: {} is not set; AI features return their fallback answers.",
            crate::config::ai::API_KEY_ENV
        );
    }
}

/// Ask the assistant for a category; never fails on remote errors
pub fn suggest_category(config: &AiConfig, description: &str) -> CasherResult<String> {
    warn_if_offline(config);
    let client = OpenAiClient::new(config.clone())?;
    block_on(ai::categorize(&client, description))
}

/// Handle an AI command
pub fn handle_ai_command(storage: &Storage, cmd: AiCommands) -> CasherResult<()> {
    let config = AiConfig::from_env();

    match cmd {
        AiCommands::Categorize { text } => {
            let category = suggest_category(&config, &text)?;
            println!("{}", category);
        }

        AiCommands::Insights => {
            warn_if_offline(&config);
            let expenses = ExpenseService::new(storage).list()?;
            let settings = SettingsService::new(storage).get()?;
            let client = OpenAiClient::new(config)?;

            let outcome = block_on(ai::refresh_insights(
                &client,
                storage.paths(),
                &expenses,
                &settings.currency,
                Utc::now(),
            ))??;

            let tips = match outcome {
                InsightsOutcome::Fresh(tips) => tips,
                InsightsOutcome::CoolingDown {
                    remaining_secs,
                    cached,
                } => {
                    println!(
                        "Insights were refreshed moments ago. Try again in {}s.",
                        remaining_secs
                    );
                    cached
                }
                InsightsOutcome::Superseded(current) => {
                    println!("A newer insights request replaced this one.");
                    current
                }
            };

            if tips.is_empty() {
                return Ok(());
            }
            println!("Spending Insights");
            println!("{}", "=".repeat(40));
            for tip in tips {
                println!("  • {}", tip);
            }
        }
    }

    Ok(())
}
