//! Reports module for Casher
//!
//! Pure aggregation over the expense list, and the dashboard and spending
//! views assembled from it.

pub mod aggregate;
pub mod dashboard;
pub mod spending;

pub use aggregate::CategoryTotals;
pub use dashboard::DashboardSummary;
pub use spending::{CategoryBar, DailyPoint, MonthComparison, PieSlice, SpendingReport};
