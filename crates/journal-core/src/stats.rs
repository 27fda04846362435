//! Aggregate statistics over the entry store.
//!
//! The aggregate itself is computed inside SQL (see `SqliteStore::stats`)
//! so the full entry set is never materialized in application memory.
//! `avg_sentiment` carries full precision here; rounding to 3 decimals
//! happens at the presentation layer.

use serde::{Deserialize, Serialize};

/// Summary statistics over all stored entries.
///
/// Invariant: the three label counts sum to `total`. An empty store yields
/// the all-zero snapshot (never an error).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total: i64,
    pub avg_sentiment: f64,
    pub positive_count: i64,
    pub negative_count: i64,
    pub neutral_count: i64,
}

impl StatsSnapshot {
    /// The all-zero snapshot returned for an empty store.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Round a score to 3 decimal places for presentation.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_is_all_zero() {
        let snapshot = StatsSnapshot::empty();
        assert_eq!(snapshot.total, 0);
        assert_eq!(snapshot.avg_sentiment, 0.0);
        assert_eq!(
            snapshot.positive_count + snapshot.negative_count + snapshot.neutral_count,
            0
        );
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.123456), 0.123);
        assert_eq!(round3(0.1235), 0.124);
        assert_eq!(round3(-0.6666666), -0.667);
        assert_eq!(round3(0.0), 0.0);
        assert_eq!(round3(1.0), 1.0);
    }
}
