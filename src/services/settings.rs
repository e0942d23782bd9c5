//! Settings service
//!
//! Display preferences and the clear-all reset.

use crate::audit::EntityType;
use crate::config::{DateFormat, Settings, Theme};
use crate::error::CasherResult;
use crate::storage::Storage;

/// Service for user preferences
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

/// Preference changes; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct SettingsChanges {
    pub theme: Option<Theme>,
    pub currency: Option<String>,
    pub date_format: Option<DateFormat>,
}

/// What a clear-all removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearSummary {
    pub expenses_removed: usize,
    pub categories_removed: usize,
}

impl<'a> SettingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> CasherResult<Settings> {
        self.storage.read(|state| state.settings.clone())
    }

    /// Apply preference changes and persist them
    pub fn update(&self, changes: SettingsChanges) -> CasherResult<Settings> {
        let currency = changes
            .currency
            .as_deref()
            .map(Settings::parse_currency)
            .transpose()?;

        let (before, after) = self.storage.update(|state| {
            let before = state.settings.clone();
            if let Some(theme) = changes.theme {
                state.settings.theme = theme;
            }
            if let Some(currency) = currency {
                state.settings.currency = currency;
            }
            if let Some(date_format) = changes.date_format {
                state.settings.date_format = date_format;
            }
            Ok((before, state.settings.clone()))
        })?;

        if before != after {
            tracing::info!(
                theme = %after.theme,
                currency = %after.currency,
                date_format = %after.date_format,
                "settings updated"
            );
            self.storage
                .log_update(EntityType::Settings, "settings", None, &before, &after);
        }

        Ok(after)
    }

    /// Remove every expense and restore the default categories. Settings
    /// are kept.
    pub fn clear_all(&self) -> CasherResult<ClearSummary> {
        let previous = self.storage.reset(true)?;
        let current = self.storage.snapshot()?;

        let summary = ClearSummary {
            expenses_removed: previous.expenses.len(),
            categories_removed: previous
                .categories
                .len()
                .saturating_sub(current.categories.len()),
        };

        tracing::warn!(
            expenses = summary.expenses_removed,
            "all expense data cleared"
        );
        self.storage
            .log_update(EntityType::State, "state", None, &previous, &current);

        Ok(summary)
    }
}
