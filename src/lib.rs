//! Casher - expense tracking from the terminal
//!
//! This library provides the core of the Casher expense tracker: recording
//! expenses, grouping them by category, and summarizing spending with a
//! dashboard and monthly reports. Optional AI features suggest categories
//! and spending tips.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths, display preferences and AI client settings
//! - `error`: Custom error types
//! - `models`: Expenses, money, months and the category set
//! - `storage`: The single JSON state record
//! - `audit`: Audit logging system
//! - `services`: Business logic layer
//! - `reports`: Aggregation, dashboard and spending report
//! - `display`: Formatting for terminal output
//! - `export`: CSV backup
//! - `ai`: Categorization and insights over a chat-completion API
//! - `cli`: Command handlers for the `casher` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use casher::config::paths::CasherPaths;
//! use casher::services::ExpenseService;
//! use casher::storage::Storage;
//!
//! let storage = Storage::open(CasherPaths::new()?)?;
//! let expenses = ExpenseService::new(&storage).list()?;
//! ```

pub mod ai;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::CasherError;
