//! Currency and date formatting

use chrono::NaiveDate;

use crate::config::DateFormat;
use crate::models::Money;

/// Display symbol for a currency code, if one is known
pub fn currency_symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "NGN" => Some("₦"),
        "JPY" => Some("¥"),
        "INR" => Some("₹"),
        _ => None,
    }
}

/// Currencies displayed without minor units
fn is_zero_decimal(code: &str) -> bool {
    matches!(code, "JPY" | "KRW")
}

/// Group the digits of a non-negative integer with commas
pub fn format_with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an amount in the given currency, en-US style.
///
/// `$1,234.56`, `-€12.50`, `¥1,235`; codes without a known symbol are
/// written out: `CHF 1,234.56`.
pub fn format_currency(amount: Money, currency: &str) -> String {
    let code = currency.trim().to_ascii_uppercase();
    let sign = if amount.is_negative() { "-" } else { "" };
    let abs = amount.abs();

    let number = if is_zero_decimal(&code) {
        format_with_commas(abs.divide(100).cents().unsigned_abs())
    } else {
        format!(
            "{}.{:02}",
            format_with_commas(abs.units().unsigned_abs()),
            abs.cents_part()
        )
    };

    match currency_symbol_for(&code) {
        Some(symbol) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{} {}", sign, code, number),
    }
}

/// Format a date with one of the user's date patterns
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    date.format(format.strftime()).to_string()
}

/// "Today", "Yesterday", "3 days ago", or the formatted date for anything a
/// week or more old (or in the future)
pub fn relative_date_label(date: NaiveDate, today: NaiveDate, format: DateFormat) -> String {
    match (today - date).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        n @ 2..=6 => format!("{} days ago", n),
        _ => format_date(date, format),
    }
}
