//! Expense service
//!
//! Add, edit, delete and look up expenses. New expenses go to the front of
//! the collection so it stays newest first.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{CasherError, CasherResult};
use crate::models::{CategorySet, Expense, ExpenseInput, ValidExpense};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

/// Changes to apply to an existing expense; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct ExpenseChanges {
    pub amount: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

impl ExpenseChanges {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.date.is_none()
    }

    /// The expense's current fields with these changes laid over them
    fn merged_input(&self, current: &Expense) -> ExpenseInput {
        ExpenseInput {
            amount: self
                .amount
                .clone()
                .unwrap_or_else(|| current.amount.to_plain_string()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| current.description.clone()),
            category: self
                .category
                .clone()
                .unwrap_or_else(|| current.category.clone()),
            date: self.date.clone().unwrap_or_else(|| current.date_key()),
        }
    }
}

fn ensure_known_category(categories: &CategorySet, valid: &ValidExpense) -> CasherResult<()> {
    if categories.contains(&valid.category) {
        Ok(())
    } else {
        Err(CasherError::Validation(format!(
            "Unknown category '{}'. Add it first with 'casher category add'",
            valid.category
        )))
    }
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and record a new expense. `today` fills in a blank date.
    pub fn create(&self, input: &ExpenseInput, today: NaiveDate) -> CasherResult<Expense> {
        let valid = input.validate(today)?;

        let expense = self.storage.update(|state| {
            ensure_known_category(&state.categories, &valid)?;
            let expense = Expense::new(valid.amount, valid.description, valid.category, valid.date);
            state.expenses.insert(0, expense.clone());
            Ok(expense)
        })?;

        tracing::info!(id = %expense.id, amount = %expense.amount, "expense added");
        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        );

        Ok(expense)
    }

    /// All expenses, newest first
    pub fn list(&self) -> CasherResult<Vec<Expense>> {
        self.storage.read(|state| state.expenses.clone())
    }

    /// Find an expense by full ID or displayed short ID.
    ///
    /// An identifier matching more than one expense is rejected.
    pub fn find(&self, identifier: &str) -> CasherResult<Option<Expense>> {
        let matches: Vec<Expense> = self.storage.read(|state| {
            state
                .expenses
                .iter()
                .filter(|e| e.id.matches(identifier))
                .cloned()
                .collect()
        })?;

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            n => Err(CasherError::Validation(format!(
                "ID '{}' is ambiguous ({} expenses match). Use more characters",
                identifier, n
            ))),
        }
    }

    /// Find an expense, failing when it does not exist
    pub fn get(&self, identifier: &str) -> CasherResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| CasherError::expense_not_found(identifier))
    }

    /// Apply changes to an expense in place, keeping its ID and position.
    ///
    /// Only a changed category must be in the category set; an expense may
    /// keep a category the set no longer lists.
    pub fn edit(
        &self,
        identifier: &str,
        changes: &ExpenseChanges,
        today: NaiveDate,
    ) -> CasherResult<Expense> {
        let before = self.get(identifier)?;
        if changes.is_empty() {
            return Ok(before);
        }

        let valid = changes.merged_input(&before).validate(today)?;

        let after = self.storage.update(|state| {
            if valid.category != before.category {
                ensure_known_category(&state.categories, &valid)?;
            }
            let slot = state
                .expenses
                .iter_mut()
                .find(|e| e.id == before.id)
                .ok_or_else(|| CasherError::expense_not_found(identifier))?;
            slot.amount = valid.amount;
            slot.description = valid.description;
            slot.category = valid.category;
            slot.date = valid.date;
            Ok(slot.clone())
        })?;

        tracing::info!(id = %after.id, "expense updated");
        self.storage.log_update(
            EntityType::Expense,
            after.id.to_string(),
            Some(after.description.clone()),
            &before,
            &after,
        );

        Ok(after)
    }

    /// Remove an expense
    pub fn delete(&self, identifier: &str) -> CasherResult<Expense> {
        let target = self.get(identifier)?;

        self.storage.update(|state| {
            state.expenses.retain(|e| e.id != target.id);
            Ok(())
        })?;

        tracing::info!(id = %target.id, "expense deleted");
        self.storage.log_delete(
            EntityType::Expense,
            target.id.to_string(),
            Some(target.description.clone()),
            &target,
        );

        Ok(target)
    }

    pub fn count(&self) -> CasherResult<usize> {
        self.storage.read(|state| state.expenses.len())
    }
}
