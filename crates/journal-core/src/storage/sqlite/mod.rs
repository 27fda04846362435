//! File-backed SQLite storage engine.
//!
//! The store handle holds only the database path. Each operation opens a
//! connection scoped to that single call and releases it on return, so no
//! locks are held across requests; id monotonicity comes from SQLite's
//! AUTOINCREMENT primary-key assignment rather than application locking.

mod row;

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{SecondsFormat, SubsecRound, Utc};
use rusqlite::Connection;

use crate::error::{JournalError, Result};
use crate::stats::StatsSnapshot;
use crate::storage::traits::EntryStore;
use crate::storage::types::{Entry, NewEntry};

use row::EntryRow;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// File-backed SQLite entry store.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open a store at `path`, creating the file and schema if absent.
    ///
    /// Idempotent: opening an existing store leaves its contents intact.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Storage` if the file cannot be created or
    /// the schema cannot be initialized.
    pub fn open(path: &Path) -> Result<Self> {
        let store = Self {
            path: path.to_path_buf(),
        };

        let conn = store.connect()?;
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT NOT NULL,
                text TEXT NOT NULL,
                sentiment_score REAL NOT NULL,
                sentiment_label TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS entries_date_created
            ON entries (date DESC, created_at DESC);
            "#,
        )?;

        Ok(store)
    }

    /// Path this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path)
            .map_err(|e| JournalError::Storage(format!("Cannot open database: {}", e)))?;
        // Waits out writer contention instead of failing immediately.
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(conn)
    }
}

impl EntryStore for SqliteStore {
    fn insert(&self, new: &NewEntry) -> Result<Entry> {
        let conn = self.connect()?;
        // Truncated to what the column actually stores, so the returned
        // record round-trips exactly.
        let created_at = Utc::now().trunc_subsecs(6);

        conn.execute(
            r#"
            INSERT INTO entries (date, text, sentiment_score, sentiment_label, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
            (
                new.date.format("%Y-%m-%d").to_string(),
                &new.text,
                new.sentiment_score,
                new.sentiment_label.as_str(),
                // Fixed-width timestamps keep lexicographic ORDER BY correct.
                created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            ),
        )?;
        let id = conn.last_insert_rowid();

        Ok(Entry {
            id,
            date: new.date,
            text: new.text.clone(),
            sentiment_score: new.sentiment_score,
            sentiment_label: new.sentiment_label,
            created_at,
        })
    }

    fn list_all(&self) -> Result<Vec<Entry>> {
        let conn = self.connect()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, date, text, sentiment_score, sentiment_label, created_at
            FROM entries
            ORDER BY date DESC, created_at DESC
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(EntryRow {
                id: row.get(0)?,
                date: row.get(1)?,
                text: row.get(2)?,
                sentiment_score: row.get(3)?,
                sentiment_label: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }

        Ok(entries)
    }

    fn count(&self) -> Result<i64> {
        let conn = self.connect()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count)
    }

    fn stats(&self) -> Result<StatsSnapshot> {
        let conn = self.connect()?;

        // AVG and SUM are NULL on an empty table; read them as options and
        // short-circuit to the all-zero snapshot.
        let (total, avg, positive, negative, neutral) = conn.query_row(
            r#"
            SELECT
                COUNT(*),
                AVG(sentiment_score),
                SUM(CASE WHEN sentiment_label = 'Positive' THEN 1 ELSE 0 END),
                SUM(CASE WHEN sentiment_label = 'Negative' THEN 1 ELSE 0 END),
                SUM(CASE WHEN sentiment_label = 'Neutral' THEN 1 ELSE 0 END)
            FROM entries
            "#,
            [],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, Option<f64>>(1)?,
                    row.get::<_, Option<i64>>(2)?,
                    row.get::<_, Option<i64>>(3)?,
                    row.get::<_, Option<i64>>(4)?,
                ))
            },
        )?;

        if total == 0 {
            return Ok(StatsSnapshot::empty());
        }

        Ok(StatsSnapshot {
            total,
            avg_sentiment: avg.unwrap_or(0.0),
            positive_count: positive.unwrap_or(0),
            negative_count: negative.unwrap_or(0),
            neutral_count: neutral.unwrap_or(0),
        })
    }
}
