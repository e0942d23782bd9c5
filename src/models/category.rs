//! Category set
//!
//! An ordered collection of unique category names. New names are appended at
//! the end; there is no removal of individual categories. Uniqueness is exact
//! string equality after trimming surrounding whitespace, so "food" and
//! "Food" are distinct categories.

use serde::{Deserialize, Serialize};

use crate::error::{CasherError, CasherResult};

/// The six canonical categories, in display order
pub const DEFAULT_CATEGORIES: [&str; 6] =
    ["Food", "Transport", "Entertainment", "Shopping", "Bills", "Other"];

/// Category every unknown or failed classification falls back to
pub const FALLBACK_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySet(Vec<String>);

impl Default for CategorySet {
    fn default() -> Self {
        Self(DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect())
    }
}

impl CategorySet {
    /// Build a set from names, dropping blanks and later duplicates
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self(Vec::new());
        for name in names {
            let _ = set.add(&name.into());
        }
        set
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|c| c == name.trim())
    }

    /// Append a new category name, returning the stored (trimmed) form
    pub fn add(&mut self, name: &str) -> CasherResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CasherError::Validation(
                "Category name cannot be empty".into(),
            ));
        }
        if self.contains(name) {
            return Err(CasherError::duplicate_category(name));
        }
        self.0.push(name.to_string());
        Ok(name.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let set = CategorySet::default();
        assert_eq!(set.len(), 6);
        assert_eq!(set.names()[0], "Food");
        assert_eq!(set.names()[5], "Other");
    }

    #[test]
    fn test_add_appends_in_order() {
        let mut set = CategorySet::default();
        assert_eq!(set.add("  Health ").unwrap(), "Health");
        assert_eq!(set.names().last().unwrap(), "Health");
        assert!(set.contains("Health"));
    }

    #[test]
    fn test_add_rejects_exact_duplicates_only() {
        let mut set = CategorySet::default();
        assert!(matches!(
            set.add("Food"),
            Err(CasherError::Duplicate { .. })
        ));
        assert!(set.add(" Food ").is_err());
        // Case differences are distinct categories
        assert!(set.add("food").is_ok());
        assert!(set.add("").unwrap_err().is_validation());
    }

    #[test]
    fn test_from_names_dedups() {
        let set = CategorySet::from_names(["A", "B", "A", " ", "C"]);
        assert_eq!(set.names(), ["A", "B", "C"]);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let set = CategorySet::from_names(["Food", "Bills"]);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["Food","Bills"]"#);
    }
}
