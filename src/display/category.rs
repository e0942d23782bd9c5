//! Category display formatting

use super::format::format_currency;
use super::palette;
use crate::models::CategorySet;
use crate::reports::CategoryTotals;

/// Format the category set with each category's spending so far.
///
/// Categories with no expenses show a zero total; categories that only
/// appear on expenses are not listed.
pub fn format_category_list(
    categories: &CategorySet,
    totals: &CategoryTotals,
    currency: &str,
    color: bool,
) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {}\n",
        "Category",
        "Spent",
        "Color",
        width = name_width
    ));

    for name in categories.iter() {
        let padded = format!("{:<width$}", name, width = name_width);
        let padded = if color {
            palette::paint(name, &padded)
        } else {
            padded
        };
        let spent = totals.get(name).unwrap_or_default();
        output.push_str(&format!(
            "{}  {:>12}  {}\n",
            padded,
            format_currency(spent, currency),
            palette::chart_color(name)
        ));
    }

    output
}
