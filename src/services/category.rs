//! Category service
//!
//! The category set only grows: names are appended and never removed
//! (short of clearing all data).

use crate::audit::EntityType;
use crate::error::CasherResult;
use crate::models::CategorySet;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The category set in display order
    pub fn list(&self) -> CasherResult<CategorySet> {
        self.storage.read(|state| state.categories.clone())
    }

    pub fn exists(&self, name: &str) -> CasherResult<bool> {
        self.storage.read(|state| state.categories.contains(name))
    }

    /// Append a category. Returns the stored (trimmed) name.
    pub fn add(&self, name: &str) -> CasherResult<String> {
        let added = self.storage.update(|state| state.categories.add(name))?;

        tracing::info!(category = %added, "category added");
        self.storage
            .log_create(EntityType::Category, added.clone(), None, &added);

        Ok(added)
    }
}
