//! Aggregation over an expense list
//!
//! Pure functions: every result is derived from the slice passed in (and a
//! month, where one applies) and nothing here can fail.

use std::collections::BTreeMap;
use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::{Expense, Money, Month};

/// Per-category totals in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(String, Money)>,
}

impl CategoryTotals {
    fn add(&mut self, category: &str, amount: Money) {
        match self.entries.iter_mut().find(|(name, _)| name == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category.to_string(), amount)),
        }
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, total)| *total)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order each category was first encountered
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.entries.iter().map(|(name, total)| (name.as_str(), *total))
    }

    pub fn sum(&self) -> Money {
        self.entries.iter().map(|(_, total)| *total).sum()
    }

    /// Entries sorted by amount, largest first. Equal amounts keep their
    /// first-seen order.
    pub fn sorted_desc(&self) -> Vec<(String, Money)> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
    }

    /// The largest total; the earliest-seen category wins a tie
    pub fn highest(&self) -> Option<(String, Money)> {
        let mut best: Option<&(String, Money)> = None;
        for entry in &self.entries {
            match best {
                Some(current) if entry.1 <= current.1 => {}
                _ => best = Some(entry),
            }
        }
        best.cloned()
    }
}

/// Sum of every amount
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of the amounts dated within `month`
pub fn total_for_month(expenses: &[Expense], month: Month) -> Money {
    expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.amount)
        .sum()
}

/// Expenses dated within `month`, in their original order
pub fn in_month(expenses: &[Expense], month: Month) -> Vec<&Expense> {
    expenses.iter().filter(|e| month.contains(e.date)).collect()
}

/// Group and sum by category
pub fn by_category(expenses: &[Expense]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for expense in expenses {
        totals.add(&expense.category, expense.amount);
    }
    totals
}

/// Per-date sums within `month`, oldest date first
pub fn daily_series(expenses: &[Expense], month: Month) -> Vec<(NaiveDate, Money)> {
    let mut days: BTreeMap<NaiveDate, Money> = BTreeMap::new();
    for expense in expenses.iter().filter(|e| month.contains(e.date)) {
        *days.entry(expense.date).or_insert_with(Money::zero) += expense.amount;
    }
    days.into_iter().collect()
}

/// Number of distinct category values present
pub fn unique_category_count(expenses: &[Expense]) -> usize {
    expenses
        .iter()
        .map(|e| e.category.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Month total divided by the number of distinct dates with an expense in
/// that month. A month with no expenses averages to zero.
pub fn average_daily_spend(expenses: &[Expense], month: Month) -> Money {
    let days = expenses
        .iter()
        .filter(|e| month.contains(e.date))
        .map(|e| e.date)
        .collect::<HashSet<_>>()
        .len();
    total_for_month(expenses, month).divide(days.max(1))
}

/// Category with the largest total; ties go to the first-seen category
pub fn highest_category(expenses: &[Expense]) -> Option<(String, Money)> {
    by_category(expenses).highest()
}

/// Category totals, largest first
pub fn categories_sorted_desc(expenses: &[Expense]) -> Vec<(String, Money)> {
    by_category(expenses).sorted_desc()
}
