//! Entry row type for database queries.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{JournalError, Result};
use crate::sentiment::SentimentLabel;
use crate::storage::types::Entry;

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: i64,
    pub date: String,
    pub text: String,
    pub sentiment_score: f64,
    pub sentiment_label: String,
    pub created_at: String,
}

impl TryFrom<EntryRow> for Entry {
    type Error = JournalError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&row.date, "%Y-%m-%d")
            .map_err(|e| JournalError::Storage(format!("Invalid entry date: {}", e)))?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| JournalError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);
        let sentiment_label = SentimentLabel::parse(&row.sentiment_label)?;

        Ok(Entry {
            id: row.id,
            date,
            text: row.text,
            sentiment_score: row.sentiment_score,
            sentiment_label,
            created_at,
        })
    }
}
