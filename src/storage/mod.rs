//! Storage layer for Casher
//!
//! The whole application state lives in one JSON record
//! (`{expenses, categories, settings}`). Loading never fails: a missing or
//! corrupt record yields the defaults. Every mutation re-serializes the full
//! record and writes it atomically.

pub mod file_io;
pub mod state;

pub use file_io::{read_json, read_json_or_default, write_json_atomic};
pub use state::AppState;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::CasherPaths;
use crate::error::{CasherError, CasherResult};

/// Holds the in-memory state and persists it as a unit
pub struct Storage {
    paths: CasherPaths,
    state: RwLock<AppState>,
    audit: AuditLogger,
}

impl Storage {
    /// Create a storage with default state; call [`Storage::load`] to read
    /// the persisted record
    pub fn new(paths: CasherPaths) -> CasherResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            state: RwLock::new(AppState::default()),
            paths,
        })
    }

    /// Create a storage and load the persisted record
    pub fn open(paths: CasherPaths) -> CasherResult<Self> {
        let storage = Self::new(paths)?;
        storage.load()?;
        Ok(storage)
    }

    pub fn paths(&self) -> &CasherPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Replace the in-memory state with the persisted record, or the
    /// defaults if it is missing or unreadable
    pub fn load(&self) -> CasherResult<()> {
        let loaded: AppState = read_json_or_default(self.paths.state_file());
        tracing::debug!(
            expenses = loaded.expenses.len(),
            categories = loaded.categories.len(),
            "state loaded"
        );
        *self.write_lock()? = loaded;
        Ok(())
    }

    /// Write the full state record to disk
    pub fn save(&self) -> CasherResult<()> {
        let state = self.read_lock()?;
        write_json_atomic(self.paths.state_file(), &*state)
    }

    /// A copy of the current state
    pub fn snapshot(&self) -> CasherResult<AppState> {
        Ok(self.read_lock()?.clone())
    }

    /// Read access to the current state
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> CasherResult<R> {
        let guard = self.read_lock()?;
        Ok(f(&guard))
    }

    /// Apply a mutation and persist the result.
    ///
    /// The closure works on a copy of the state. If it returns an error, or
    /// the write fails, neither memory nor disk change. Otherwise the copy is
    /// written as one record and then replaces the in-memory state.
    pub fn update<R>(
        &self,
        f: impl FnOnce(&mut AppState) -> CasherResult<R>,
    ) -> CasherResult<R> {
        let mut state = self.write_lock()?;
        let mut next = state.clone();
        let result = f(&mut next)?;
        write_json_atomic(self.paths.state_file(), &next)?;
        *state = next;
        Ok(result)
    }

    /// Reset expenses and categories to the defaults, keeping settings when
    /// `keep_settings` is set, and persist the result
    pub fn reset(&self, keep_settings: bool) -> CasherResult<AppState> {
        self.update(|state| {
            let mut next = AppState::default();
            if keep_settings {
                next.settings = state.settings.clone();
            }
            Ok(std::mem::replace(state, next))
        })
    }

    // === Audit helpers ===
    //
    // These run after a mutation has been committed, so a failed audit write
    // is logged and does not fail the operation.

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.record(AuditEntry::create(entity_type, entity_id, entity_name, entity));
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) {
        self.record(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
        ));
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.record(AuditEntry::delete(entity_type, entity_id, entity_name, entity));
    }

    fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.log(&entry) {
            tracing::warn!(
                operation = %entry.operation,
                entity = %entry.entity_id,
                error = %e,
                "failed to write audit entry"
            );
        }
    }

    fn read_lock(&self) -> CasherResult<RwLockReadGuard<'_, AppState>> {
        self.state
            .read()
            .map_err(|e| CasherError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> CasherResult<RwLockWriteGuard<'_, AppState>> {
        self.state
            .write()
            .map_err(|e| CasherError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}
