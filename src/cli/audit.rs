//! Audit log and configuration CLI commands

use crate::config::ai::API_KEY_ENV;
use crate::config::paths::DATA_DIR_ENV;
use crate::config::AiConfig;
use crate::error::CasherResult;
use crate::storage::Storage;

/// Handle the audit command
pub fn handle_audit_command(storage: &Storage, count: usize) -> CasherResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

/// Handle the config command
pub fn handle_config_command(storage: &Storage) -> CasherResult<()> {
    let paths = storage.paths();
    let ai = AiConfig::from_env();

    println!("Casher Configuration");
    println!("====================");
    println!("Data directory:  {}", paths.base_dir().display());
    println!("State file:      {}", paths.state_file().display());
    println!("Audit log:       {}", paths.audit_log().display());
    println!("Insights cache:  {}", paths.insights_cache().display());
    println!("  (override with {})", DATA_DIR_ENV);
    println!();
    println!("AI assistant:");
    println!(
        "  API key:       {}",
        if ai.has_credentials() {
            "set".to_string()
        } else {
            format!("not set ({})", API_KEY_ENV)
        }
    );
    println!("  Model:         {}", ai.model);
    println!("  Endpoint:      {}", ai.completions_url());
    println!("  Timeout:       {}s", ai.timeout.as_secs());
    Ok(())
}
