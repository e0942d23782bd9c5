//! AI-assisted categorization and spending insights
//!
//! Both features degrade instead of failing: without credentials, on network
//! errors or on unreadable replies they return fixed fallback values.
//!
//! Insights requests go through an [`InsightsGate`] persisted next to the
//! state record, so the cooldown and the generation check hold across
//! separate runs of the CLI.

pub mod categorize;
pub mod client;
pub mod gate;
pub mod insights;

pub use categorize::categorize;
pub use client::{ChatMessage, CompletionBackend, OpenAiClient, Prompt};
pub use gate::{CoolingDown, InsightsGate, COOLDOWN_SECS};
pub use insights::{generate_insights, EMPTY_MESSAGE, FALLBACK_MESSAGE};

use chrono::{DateTime, Utc};

use crate::config::CasherPaths;
use crate::error::CasherResult;
use crate::models::Expense;
use crate::storage::{read_json_or_default, write_json_atomic};

/// What an insights refresh produced
#[derive(Debug, Clone, PartialEq)]
pub enum InsightsOutcome {
    /// A new reply was received and stored
    Fresh(Vec<String>),
    /// A request was made too recently; the last stored insights are returned
    CoolingDown {
        remaining_secs: i64,
        cached: Vec<String>,
    },
    /// A newer request started while this one was in flight; its reply was
    /// dropped and the currently stored insights are returned
    Superseded(Vec<String>),
}

/// Request fresh insights through the persisted gate
pub async fn refresh_insights<B: CompletionBackend>(
    backend: &B,
    paths: &CasherPaths,
    expenses: &[Expense],
    currency: &str,
    now: DateTime<Utc>,
) -> CasherResult<InsightsOutcome> {
    let cache = paths.insights_cache();

    let mut gate: InsightsGate = read_json_or_default(&cache);
    let generation = match gate.begin(now) {
        Ok(generation) => generation,
        Err(cooling) => {
            return Ok(InsightsOutcome::CoolingDown {
                remaining_secs: cooling.remaining_secs(),
                cached: gate.insights().to_vec(),
            })
        }
    };
    write_json_atomic(&cache, &gate)?;

    let tips = generate_insights(backend, expenses, currency).await;

    // Re-read: another run may have started a newer request meanwhile
    let mut gate: InsightsGate = read_json_or_default(&cache);
    if gate.apply(generation, tips.clone()) {
        write_json_atomic(&cache, &gate)?;
        Ok(InsightsOutcome::Fresh(tips))
    } else {
        Ok(InsightsOutcome::Superseded(gate.insights().to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::client::testing::StubBackend;
    use crate::models::Money;
    use chrono::{Duration, NaiveDate};
    use tempfile::TempDir;

    fn sample() -> Vec<Expense> {
        vec![Expense::new(
            Money::from_cents(2500),
            "Groceries",
            "Food",
            NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
        )]
    }

    #[tokio::test]
    async fn test_refresh_then_cooldown() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CasherPaths::with_base_dir(temp_dir.path().to_path_buf());
        let now = Utc::now();

        let backend = StubBackend::replying("[\"Nice work on Food!\", \"Keep it up\"]");
        let outcome = refresh_insights(&backend, &paths, &sample(), "USD", now)
            .await
            .unwrap();
        assert_eq!(
            outcome,
            InsightsOutcome::Fresh(vec!["Nice work on Food!".into(), "Keep it up".into()])
        );

        let second = StubBackend::replying("[\"other\"]");
        let outcome = refresh_insights(&second, &paths, &sample(), "USD", now + Duration::seconds(3))
            .await
            .unwrap();
        match outcome {
            InsightsOutcome::CoolingDown {
                remaining_secs,
                cached,
            } => {
                assert_eq!(remaining_secs, 7);
                assert_eq!(cached.len(), 2);
            }
            other => panic!("expected cooldown, got {:?}", other),
        }
        assert_eq!(second.calls(), 0);
    }

    #[tokio::test]
    async fn test_failure_stores_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CasherPaths::with_base_dir(temp_dir.path().to_path_buf());

        let outcome = refresh_insights(&StubBackend::failing(), &paths, &sample(), "USD", Utc::now())
            .await
            .unwrap();
        assert_eq!(outcome, InsightsOutcome::Fresh(vec![FALLBACK_MESSAGE.to_string()]));
    }
}
