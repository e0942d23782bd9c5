//! Path management for Casher
//!
//! ## Path Resolution Order
//!
//! 1. `CASHER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `casher` as reported by `directories`
//!    (`~/.config/casher` on Linux, `~/Library/Application Support/casher` on
//!    macOS, `%APPDATA%\casher\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CasherError;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "CASHER_DATA_DIR";

/// Manages all paths used by Casher
#[derive(Debug, Clone)]
pub struct CasherPaths {
    base_dir: PathBuf,
}

impl CasherPaths {
    /// Create a new CasherPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, CasherError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create CasherPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// The single persisted state record (`{expenses, categories, settings}`)
    pub fn state_file(&self) -> PathBuf {
        self.base_dir.join("state.json")
    }

    /// Append-only audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Last insights response and the request gate that produced it
    pub fn insights_cache(&self) -> PathBuf {
        self.base_dir.join("insights.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CasherError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CasherError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, CasherError> {
    ProjectDirs::from("", "", "casher")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| CasherError::Config("Could not determine home directory".into()))
}
