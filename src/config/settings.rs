//! User display settings for Casher
//!
//! Settings are persisted inside the single state record next to expenses and
//! categories. Every field falls back to its default when absent.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CasherError;

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = CasherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(CasherError::Validation(format!(
                "Unknown theme '{}'. Use light or dark",
                other
            ))),
        }
    }
}

/// Date display pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DateFormat {
    /// 01/28/2025
    #[default]
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    /// 28/01/2025
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
    /// 2025-01-28
    #[serde(rename = "YYYY-MM-DD")]
    Iso,
}

impl DateFormat {
    pub fn all() -> &'static [DateFormat] {
        &[Self::MonthDayYear, Self::DayMonthYear, Self::Iso]
    }

    /// The user-facing pattern string
    pub fn pattern(&self) -> &'static str {
        match self {
            Self::MonthDayYear => "MM/DD/YYYY",
            Self::DayMonthYear => "DD/MM/YYYY",
            Self::Iso => "YYYY-MM-DD",
        }
    }

    /// The equivalent chrono format string
    pub fn strftime(&self) -> &'static str {
        match self {
            Self::MonthDayYear => "%m/%d/%Y",
            Self::DayMonthYear => "%d/%m/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

impl FromStr for DateFormat {
    type Err = CasherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|f| f.pattern().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                CasherError::Validation(format!(
                    "Unknown date format '{}'. Use MM/DD/YYYY, DD/MM/YYYY or YYYY-MM-DD",
                    s
                ))
            })
    }
}

/// Persisted display preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,

    /// ISO 4217 currency code used for display formatting
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub date_format: DateFormat,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            currency: default_currency(),
            date_format: DateFormat::default(),
        }
    }
}

impl Settings {
    /// Normalize and validate a currency code (three ASCII letters)
    pub fn parse_currency(code: &str) -> Result<String, CasherError> {
        let code = code.trim().to_ascii_uppercase();
        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(code)
        } else {
            Err(CasherError::Validation(format!(
                "Invalid currency code '{}'. Use a three-letter ISO code such as USD",
                code
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.date_format, DateFormat::MonthDayYear);
    }

    #[test]
    fn test_wire_format() {
        let settings = Settings {
            theme: Theme::Dark,
            currency: "NGN".into(),
            date_format: DateFormat::Iso,
        };
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"theme": "dark", "currency": "NGN", "dateFormat": "YYYY-MM-DD"})
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"theme": "dark"}"#).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.date_format, DateFormat::MonthDayYear);
    }

    #[test]
    fn test_parse_date_format() {
        assert_eq!("dd/mm/yyyy".parse::<DateFormat>().unwrap(), DateFormat::DayMonthYear);
        assert!("YYYY/MM/DD".parse::<DateFormat>().is_err());
    }

    #[test]
    fn test_parse_currency() {
        assert_eq!(Settings::parse_currency(" eur ").unwrap(), "EUR");
        assert!(Settings::parse_currency("EURO").is_err());
        assert!(Settings::parse_currency("U$D").is_err());
    }
}
