//! Spending Report
//!
//! Category bars and pie slices over every recorded expense, a daily line for
//! the target month, and summary statistics comparing the target month with
//! the one before it.

use std::io::Write;

use chrono::NaiveDate;

use super::aggregate;
use crate::config::Settings;
use crate::display::format::format_currency;
use crate::display::palette;
use crate::display::report::{
    double_separator, format_bar, format_change, format_percentage, pad_right, separator,
};
use crate::error::{CasherError, CasherResult};
use crate::models::{Expense, Money, Month};

const BAR_WIDTH: usize = 30;

/// One bar of the category chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    pub category: String,
    pub total: Money,
    /// Hex chart color
    pub color: &'static str,
}

/// One slice of the category pie
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: String,
    pub value: Money,
    /// `value / total`, 0 when the total is zero
    pub fraction: f64,
    /// Whole-number percentage label, e.g. "42%"
    pub label: String,
    pub color: &'static str,
}

/// One point of the daily spending line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Short axis label, e.g. "Jan 5"
    pub label: String,
    pub amount: Money,
}

/// Target month against the previous calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthComparison {
    pub current: Month,
    pub current_total: Money,
    pub previous: Month,
    pub previous_total: Money,
}

impl MonthComparison {
    /// Percentage change from the previous month; `None` when the previous
    /// month has no spending
    pub fn change_percent(&self) -> Option<f64> {
        if self.previous_total.is_zero() {
            None
        } else {
            let delta = (self.current_total - self.previous_total).as_f64();
            Some(delta / self.previous_total.as_f64() * 100.0)
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpendingReport {
    pub month: Month,
    /// Largest category first
    pub bars: Vec<CategoryBar>,
    /// Same order as `bars`
    pub slices: Vec<PieSlice>,
    /// Oldest date first
    pub daily: Vec<DailyPoint>,
    pub total: Money,
    pub average_daily: Money,
    pub highest: Option<(String, Money)>,
    pub comparison: MonthComparison,
}

impl SpendingReport {
    /// Build the report for `month`
    pub fn generate(expenses: &[Expense], month: Month) -> Self {
        let sorted = aggregate::categories_sorted_desc(expenses);
        let total = aggregate::total(expenses);

        let bars = sorted
            .iter()
            .map(|(category, amount)| CategoryBar {
                category: category.clone(),
                total: *amount,
                color: palette::chart_color(category),
            })
            .collect();

        let slices = sorted
            .iter()
            .map(|(category, amount)| {
                let fraction = amount.fraction_of(total);
                PieSlice {
                    category: category.clone(),
                    value: *amount,
                    fraction,
                    label: format_percentage(fraction),
                    color: palette::chart_color(category),
                }
            })
            .collect();

        let daily = aggregate::daily_series(expenses, month)
            .into_iter()
            .map(|(date, amount)| DailyPoint {
                date,
                label: date.format("%b %-d").to_string(),
                amount,
            })
            .collect();

        let previous = month.prev();
        let comparison = MonthComparison {
            current: month,
            current_total: aggregate::total_for_month(expenses, month),
            previous,
            previous_total: aggregate::total_for_month(expenses, previous),
        };

        Self {
            month,
            bars,
            slices,
            daily,
            total,
            average_daily: aggregate::average_daily_spend(expenses, month),
            // First entry of the descending sort, so ties keep first-seen order
            highest: sorted.first().cloned(),
            comparison,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings, color: bool) -> String {
        let currency = settings.currency.as_str();
        let money = |amount: Money| format_currency(amount, currency);
        let mut output = String::new();

        output.push_str(&format!(
            "Spending Report: {} {}\n",
            self.month.name(),
            self.month.year()
        ));
        output.push_str(&double_separator(72));
        output.push('\n');

        output.push_str(&format!(
            "{:<24} {}\n",
            "Average Daily Spending",
            money(self.average_daily)
        ));
        match &self.highest {
            Some((category, amount)) => output.push_str(&format!(
                "{:<24} {} ({})\n",
                "Highest Category",
                category,
                money(*amount)
            )),
            None => output.push_str(&format!("{:<24} N/A (No data)\n", "Highest Category")),
        }
        output.push_str(&format!(
            "{:<24} {}\n",
            "This Month",
            money(self.comparison.current_total)
        ));
        let last_month = if self.comparison.previous_total.is_zero() {
            "N/A".to_string()
        } else {
            money(self.comparison.previous_total)
        };
        match self.comparison.change_percent() {
            Some(change) => output.push_str(&format!(
                "{:<24} {} ({})\n",
                "Last Month",
                last_month,
                format_change(change)
            )),
            None => output.push_str(&format!("{:<24} {}\n", "Last Month", last_month)),
        }

        output.push_str("\nExpenses by Category\n");
        output.push_str(&separator(72));
        output.push('\n');
        if self.bars.is_empty() {
            output.push_str("No data available\n");
        } else {
            let max = self.bars.first().map(|b| b.total.as_f64()).unwrap_or(0.0);
            for (bar, slice) in self.bars.iter().zip(&self.slices) {
                let name = pad_right(&bar.category, 16);
                let chart = format_bar(bar.total.as_f64(), max, BAR_WIDTH);
                let chart = if color {
                    palette::paint(&bar.category, &chart)
                } else {
                    chart
                };
                output.push_str(&format!(
                    "{} {} {:>12} {:>5}\n",
                    name,
                    chart,
                    money(bar.total),
                    slice.label
                ));
            }
        }

        output.push_str(&format!("\nDaily Spending ({})\n", self.month));
        output.push_str(&separator(72));
        output.push('\n');
        if self.daily.is_empty() {
            output.push_str("No data available\n");
        } else {
            let max = self
                .daily
                .iter()
                .map(|p| p.amount)
                .max()
                .unwrap_or_default()
                .as_f64();
            for point in &self.daily {
                output.push_str(&format!(
                    "{:<8} {} {:>12}\n",
                    point.label,
                    format_bar(point.amount.as_f64(), max, BAR_WIDTH),
                    money(point.amount)
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> CasherResult<()> {
        let export_err = |e: std::io::Error| CasherError::Export(e.to_string());

        writeln!(writer, "Section,Key,Amount,Percentage").map_err(export_err)?;

        for slice in &self.slices {
            writeln!(
                writer,
                "category,{},{:.2},{:.2}",
                csv_field(&slice.category),
                slice.value.as_f64(),
                slice.fraction * 100.0
            )
            .map_err(export_err)?;
        }

        for point in &self.daily {
            writeln!(writer, "daily,{},{:.2},", point.date, point.amount.as_f64())
                .map_err(export_err)?;
        }

        writeln!(
            writer,
            "summary,average_daily,{:.2},",
            self.average_daily.as_f64()
        )
        .map_err(export_err)?;
        writeln!(
            writer,
            "summary,{},{:.2},",
            self.comparison.current,
            self.comparison.current_total.as_f64()
        )
        .map_err(export_err)?;
        writeln!(
            writer,
            "summary,{},{:.2},",
            self.comparison.previous,
            self.comparison.previous_total.as_f64()
        )
        .map_err(export_err)?;
        writeln!(writer, "summary,total,{:.2},100.00", self.total.as_f64()).map_err(export_err)?;

        Ok(())
    }
}

/// Quote a field when it contains a delimiter, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
