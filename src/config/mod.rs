//! Configuration module for Casher
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - Persisted display settings (theme, currency, date format)
//! - Environment-driven AI client configuration

pub mod ai;
pub mod paths;
pub mod settings;

pub use ai::AiConfig;
pub use paths::CasherPaths;
pub use settings::{DateFormat, Settings, Theme};
