//! Dashboard summary
//!
//! Headline numbers plus the most recent activity.

use chrono::NaiveDate;

use super::aggregate;
use crate::config::Settings;
use crate::display::format::{format_currency, relative_date_label};
use crate::display::palette;
use crate::display::report::{pad_right, separator, truncate};
use crate::models::{Expense, Money, Month};

/// How many expenses the recent-activity list shows
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total: Money,
    pub expense_count: usize,
    pub month: Month,
    pub month_total: Money,
    pub category_count: usize,
    /// Newest first, as stored
    pub recent: Vec<Expense>,
}

impl DashboardSummary {
    /// Summarize `expenses` as of `today`
    pub fn generate(expenses: &[Expense], today: NaiveDate) -> Self {
        let month = Month::of(today);
        Self {
            total: aggregate::total(expenses),
            expense_count: expenses.len(),
            month,
            month_total: aggregate::total_for_month(expenses, month),
            category_count: aggregate::unique_category_count(expenses),
            recent: expenses.iter().take(RECENT_LIMIT).cloned().collect(),
        }
    }

    fn expense_subtitle(&self) -> String {
        match self.expense_count {
            0 => "No expenses recorded yet".to_string(),
            1 => "1 expense".to_string(),
            n => format!("{} expenses", n),
        }
    }

    fn month_subtitle(&self) -> String {
        if self.month_total.is_zero() {
            "Start tracking your expenses".to_string()
        } else {
            format!("In {}", self.month.name())
        }
    }

    fn category_subtitle(&self) -> String {
        match self.category_count {
            0 => "Create your first category".to_string(),
            1 => "1 category".to_string(),
            n => format!("{} categories", n),
        }
    }

    pub fn format_terminal(&self, settings: &Settings, today: NaiveDate, color: bool) -> String {
        let currency = settings.currency.as_str();
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>14}   {}\n",
            "Total Expenses",
            format_currency(self.total, currency),
            self.expense_subtitle()
        ));
        output.push_str(&format!(
            "{:<16} {:>14}   {}\n",
            "This Month",
            format_currency(self.month_total, currency),
            self.month_subtitle()
        ));
        output.push_str(&format!(
            "{:<16} {:>14}   {}\n",
            "Categories",
            self.category_count,
            self.category_subtitle()
        ));

        output.push_str("\nRecent Activity\n");
        output.push_str(&separator(60));
        output.push('\n');

        if self.recent.is_empty() {
            output.push_str("No activity yet. Add your first expense to get started!\n");
            return output;
        }

        for expense in &self.recent {
            let category = pad_right(&expense.category, 14);
            let category = if color {
                palette::paint(&expense.category, &category)
            } else {
                category
            };
            output.push_str(&format!(
                "{} {} {:>12}  {}\n",
                pad_right(&truncate(&expense.description, 24), 24),
                category,
                format_currency(expense.amount, currency),
                relative_date_label(expense.date, today, settings.date_format)
            ));
        }

        output
    }
}
