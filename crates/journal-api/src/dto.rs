//! Request and response shapes for the REST API.
//!
//! Scores are rounded to 3 decimal places here, at the presentation
//! boundary; the core keeps full precision.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use journal_core::{round3, Entry, SentimentLabel, StatsSnapshot};

/// Input for creating a journal entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEntryRequest {
    pub text: Option<String>,
    /// Logical entry date (`YYYY-MM-DD`); defaults to the server's current
    /// date when absent.
    pub date: Option<String>,
}

/// A journal entry as returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryResponse {
    pub id: i64,
    pub date: NaiveDate,
    pub text: String,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
    pub created_at: DateTime<Utc>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            date: entry.date,
            text: entry.text,
            sentiment_score: round3(entry.sentiment_score),
            sentiment_label: entry.sentiment_label,
            created_at: entry.created_at,
        }
    }
}

/// Aggregate statistics as returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total: i64,
    pub avg_sentiment: f64,
    pub positive_count: i64,
    pub negative_count: i64,
    pub neutral_count: i64,
}

impl From<StatsSnapshot> for StatsResponse {
    fn from(stats: StatsSnapshot) -> Self {
        Self {
            total: stats.total,
            avg_sentiment: round3(stats.avg_sentiment),
            positive_count: stats.positive_count,
            negative_count: stats.negative_count,
            neutral_count: stats.neutral_count,
        }
    }
}
