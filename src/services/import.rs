//! CSV Import service
//!
//! Reads the CSV backup format (`id,amount,description,category,date`) back
//! into the expense collection. Columns are located by header name, so the
//! order may differ and the `id` column may be absent. Imported expenses get
//! fresh IDs; categories not yet in the set are appended to it.
//!
//! An import is all-or-nothing: if any row fails validation nothing is
//! stored and the error names the row.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::audit::EntityType;
use crate::error::{CasherError, CasherResult};
use crate::models::{Expense, ExpenseInput, ValidExpense, FALLBACK_CATEGORY};
use crate::storage::Storage;

/// Column positions found in the header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub amount: usize,
    pub description: usize,
    pub category: Option<usize>,
    pub date: usize,
}

impl ColumnMapping {
    /// Locate columns by (case-insensitive) header name
    pub fn from_headers(headers: &StringRecord) -> CasherResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let required = |name: &str| {
            find(name).ok_or_else(|| {
                CasherError::Import(format!("Missing required column '{}'", name))
            })
        };

        Ok(Self {
            amount: required("amount")?,
            description: required("description")?,
            category: find("category"),
            date: required("date")?,
        })
    }

    fn input_from(&self, record: &StringRecord) -> ExpenseInput {
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();
        let category = self
            .category
            .map(field)
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| FALLBACK_CATEGORY.to_string());

        ExpenseInput {
            amount: field(self.amount),
            description: field(self.description),
            category,
            date: field(self.date),
        }
    }
}

/// A data row that passed validation
#[derive(Debug, Clone)]
pub struct ParsedRow {
    /// 1-based position among the data rows
    pub row_number: usize,
    pub expense: ValidExpense,
}

/// Result of a completed import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub imported: usize,
    /// Rows identical to an expense already stored
    pub duplicates_skipped: usize,
    /// Category names appended to the set, in order
    pub categories_added: Vec<String>,
}

/// Service for CSV import
pub struct ImportService<'a> {
    storage: &'a Storage,
}

fn same_expense(existing: &Expense, row: &ValidExpense) -> bool {
    existing.amount == row.amount
        && existing.description == row.description
        && existing.category == row.category
        && existing.date == row.date
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse and validate every data row. Fails on the first bad row.
    pub fn parse_csv<R: Read>(&self, reader: R, today: NaiveDate) -> CasherResult<Vec<ParsedRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| CasherError::Import(format!("Failed to read header: {}", e)))?
            .clone();
        let mapping = ColumnMapping::from_headers(&headers)?;

        let mut rows = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let row_number = idx + 1;
            let record = record
                .map_err(|e| CasherError::Import(format!("Row {}: {}", row_number, e)))?;
            let expense = mapping
                .input_from(&record)
                .validate(today)
                .map_err(|e| CasherError::Import(format!("Row {}: {}", row_number, e)))?;
            rows.push(ParsedRow {
                row_number,
                expense,
            });
        }

        tracing::debug!(rows = rows.len(), "parsed import file");
        Ok(rows)
    }

    /// Import rows from any reader
    pub fn import_csv<R: Read>(
        &self,
        reader: R,
        today: NaiveDate,
        skip_duplicates: bool,
    ) -> CasherResult<ImportResult> {
        let rows = self.parse_csv(reader, today)?;

        let (result, created) = self.storage.update(|state| {
            let mut result = ImportResult::default();
            let mut created = Vec::new();
            // Rows are appended, so this prefix is the pre-import collection.
            // Repeated rows within the file are kept.
            let existing = state.expenses.len();

            for row in rows {
                let valid = row.expense;
                if skip_duplicates
                    && state.expenses[..existing]
                        .iter()
                        .any(|e| same_expense(e, &valid))
                {
                    result.duplicates_skipped += 1;
                    continue;
                }
                if !state.categories.contains(&valid.category) {
                    result
                        .categories_added
                        .push(state.categories.add(&valid.category)?);
                }
                let expense =
                    Expense::new(valid.amount, valid.description, valid.category, valid.date);
                state.expenses.push(expense.clone());
                created.push(expense);
            }

            result.imported = created.len();
            Ok((result, created))
        })?;

        tracing::info!(
            imported = result.imported,
            skipped = result.duplicates_skipped,
            "import complete"
        );

        for name in &result.categories_added {
            self.storage
                .log_create(EntityType::Category, name.clone(), None, name);
        }
        for expense in &created {
            self.storage.log_create(
                EntityType::Expense,
                expense.id.to_string(),
                Some(expense.description.clone()),
                expense,
            );
        }

        Ok(result)
    }

    /// Import from a file on disk
    pub fn import_file(
        &self,
        path: &Path,
        today: NaiveDate,
        skip_duplicates: bool,
    ) -> CasherResult<ImportResult> {
        let file = std::fs::File::open(path).map_err(|e| {
            CasherError::Import(format!("Failed to open {}: {}", path.display(), e))
        })?;
        self.import_csv(file, today, skip_duplicates)
    }
}
