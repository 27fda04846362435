//! Core data types for the storage layer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{JournalError, Result};
use crate::sentiment::SentimentLabel;

/// A persisted journal entry.
///
/// Entries are append-only: once stored they are never updated or deleted,
/// and ids are never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Store-assigned identifier, monotonically increasing
    pub id: i64,

    /// Logical entry date (user-supplied or defaulted at creation)
    pub date: NaiveDate,

    /// Journal content, whitespace-trimmed, never empty
    pub text: String,

    /// Polarity score in [-1.0, 1.0]
    pub sentiment_score: f64,

    /// Label derived from the score; never stored inconsistently
    pub sentiment_label: SentimentLabel,

    /// Insertion timestamp, store-assigned, immutable
    pub created_at: DateTime<Utc>,
}

/// An entry awaiting insertion; `id` and `created_at` are assigned by the
/// store.
///
/// The constructor derives the label from the score, so the pair can never
/// disagree.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub text: String,
    pub sentiment_score: f64,
    pub sentiment_label: SentimentLabel,
}

impl NewEntry {
    /// Build a new entry from validated parts.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if `text` is empty after
    /// trimming, or if `score` falls outside [-1.0, 1.0].
    pub fn new(date: NaiveDate, text: &str, score: f64) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(JournalError::Validation(
                "Text cannot be empty".to_string(),
            ));
        }
        if !(-1.0..=1.0).contains(&score) {
            return Err(JournalError::Validation(format!(
                "Sentiment score out of range: {}",
                score
            )));
        }

        Ok(Self {
            date,
            text: trimmed.to_string(),
            sentiment_score: score,
            sentiment_label: SentimentLabel::from_score(score),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        value.parse().expect("valid date")
    }

    #[test]
    fn test_new_entry_trims_and_labels() {
        let entry = NewEntry::new(date("2024-01-15"), "  a good day  ", 0.6).unwrap();
        assert_eq!(entry.text, "a good day");
        assert_eq!(entry.sentiment_label, SentimentLabel::Positive);
    }

    #[test]
    fn test_new_entry_rejects_blank_text() {
        assert!(NewEntry::new(date("2024-01-15"), "", 0.0).is_err());
        assert!(NewEntry::new(date("2024-01-15"), "   \t\n", 0.0).is_err());
    }

    #[test]
    fn test_new_entry_rejects_out_of_range_score() {
        assert!(NewEntry::new(date("2024-01-15"), "text", 1.5).is_err());
        assert!(NewEntry::new(date("2024-01-15"), "text", -1.01).is_err());
        assert!(NewEntry::new(date("2024-01-15"), "text", 1.0).is_ok());
        assert!(NewEntry::new(date("2024-01-15"), "text", -1.0).is_ok());
    }
}
