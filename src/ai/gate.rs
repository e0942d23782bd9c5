//! Request gate for insights
//!
//! Enforces a cooldown between insights requests and stamps each request
//! with a generation number. A reply is applied only if its generation is
//! still the latest one issued, so a slow reply can never overwrite the
//! result of a newer request.
//!
//! The gate is plain data so it can be persisted between CLI runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Minimum time between two insights requests
pub const COOLDOWN_SECS: i64 = 10;

/// Why a request was not started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoolingDown {
    /// Time left until the next request is allowed
    pub remaining: Duration,
}

impl CoolingDown {
    /// Whole seconds left, rounded up
    pub fn remaining_secs(&self) -> i64 {
        let ms = self.remaining.num_milliseconds();
        (ms + 999) / 1000
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsGate {
    #[serde(default)]
    last_request_at: Option<DateTime<Utc>>,
    /// Generation of the most recently started request
    #[serde(default)]
    latest_generation: u64,
    /// Generation whose reply is held in `insights`
    #[serde(default)]
    applied_generation: u64,
    #[serde(default)]
    insights: Vec<String>,
    #[serde(skip, default = "default_cooldown")]
    cooldown: Duration,
}

fn default_cooldown() -> Duration {
    Duration::seconds(COOLDOWN_SECS)
}

impl Default for InsightsGate {
    fn default() -> Self {
        Self {
            last_request_at: None,
            latest_generation: 0,
            applied_generation: 0,
            insights: Vec::new(),
            cooldown: default_cooldown(),
        }
    }
}

impl InsightsGate {
    pub fn with_cooldown(cooldown: Duration) -> Self {
        Self {
            cooldown,
            ..Self::default()
        }
    }

    /// Start a request at `now`, returning its generation, unless the
    /// previous request was less than the cooldown ago
    pub fn begin(&mut self, now: DateTime<Utc>) -> Result<u64, CoolingDown> {
        if let Some(last) = self.last_request_at {
            let elapsed = now - last;
            if elapsed < self.cooldown {
                return Err(CoolingDown {
                    remaining: self.cooldown - elapsed,
                });
            }
        }

        self.last_request_at = Some(now);
        self.latest_generation += 1;
        Ok(self.latest_generation)
    }

    /// Store a reply if it belongs to the latest request. Returns whether
    /// it was applied.
    pub fn apply(&mut self, generation: u64, insights: Vec<String>) -> bool {
        if generation != self.latest_generation || generation <= self.applied_generation {
            tracing::debug!(
                generation,
                latest = self.latest_generation,
                "discarding superseded insights"
            );
            return false;
        }
        self.applied_generation = generation;
        self.insights = insights;
        true
    }

    /// The most recently applied insights
    pub fn insights(&self) -> &[String] {
        &self.insights
    }

    pub fn latest_generation(&self) -> u64 {
        self.latest_generation
    }

    pub fn last_request_at(&self) -> Option<DateTime<Utc>> {
        self.last_request_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn test_cooldown() {
        let mut gate = InsightsGate::default();
        assert_eq!(gate.begin(at(0)), Ok(1));

        let blocked = gate.begin(at(4)).unwrap_err();
        assert_eq!(blocked.remaining_secs(), 6);

        assert_eq!(gate.begin(at(10)), Ok(2));
    }

    #[test]
    fn test_superseded_reply_is_discarded() {
        let mut gate = InsightsGate::with_cooldown(Duration::zero());
        let first = gate.begin(at(0)).unwrap();
        let second = gate.begin(at(1)).unwrap();

        assert!(gate.apply(second, vec!["new".into()]));
        assert!(!gate.apply(first, vec!["old".into()]));
        assert_eq!(gate.insights(), &["new".to_string()]);
    }

    #[test]
    fn test_reply_applies_once() {
        let mut gate = InsightsGate::default();
        let generation = gate.begin(at(0)).unwrap();
        assert!(gate.apply(generation, vec!["a".into()]));
        assert!(!gate.apply(generation, vec!["b".into()]));
        assert_eq!(gate.insights(), &["a".to_string()]);
    }

    #[test]
    fn test_persisted_form() {
        let mut gate = InsightsGate::default();
        let generation = gate.begin(at(0)).unwrap();
        gate.apply(generation, vec!["tip".into()]);

        let json = serde_json::to_string(&gate).unwrap();
        let restored: InsightsGate = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, gate);
        assert!(restored.clone().begin(at(3)).is_err());
    }
}
