use std::thread;
use std::time::Duration;

use chrono::NaiveDate;
use tempfile::TempDir;

use journal_core::{EntryStore, NewEntry, SentimentLabel, SqliteStore};

fn open_store(dir: &TempDir) -> SqliteStore {
    SqliteStore::open(&dir.path().join("journal.db")).expect("open should succeed")
}

fn date(value: &str) -> NaiveDate {
    value.parse().expect("valid date")
}

fn entry(date_str: &str, text: &str, score: f64) -> NewEntry {
    NewEntry::new(date(date_str), text, score).expect("valid entry")
}

#[test]
fn test_empty_store_reads() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    assert_eq!(store.count().expect("count"), 0);
    assert!(store.list_all().expect("list").is_empty());

    let stats = store.stats().expect("stats");
    assert_eq!(stats.total, 0);
    assert_eq!(stats.avg_sentiment, 0.0);
    assert_eq!(stats.positive_count, 0);
    assert_eq!(stats.negative_count, 0);
    assert_eq!(stats.neutral_count, 0);
}

#[test]
fn test_insert_assigns_increasing_ids() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    let first = store
        .insert(&entry("2024-01-01", "first entry", 0.5))
        .expect("insert");
    let second = store
        .insert(&entry("2024-01-02", "second entry", -0.5))
        .expect("insert");
    let third = store
        .insert(&entry("2024-01-03", "third entry", 0.0))
        .expect("insert");

    assert!(first.id < second.id);
    assert!(second.id < third.id);
    assert_eq!(store.count().expect("count"), 3);
}

#[test]
fn test_insert_returns_full_record() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    let inserted = store
        .insert(&entry("2024-02-10", "a wonderful day", 0.9))
        .expect("insert");

    assert_eq!(inserted.date, date("2024-02-10"));
    assert_eq!(inserted.text, "a wonderful day");
    assert_eq!(inserted.sentiment_score, 0.9);
    assert_eq!(inserted.sentiment_label, SentimentLabel::Positive);

    let listed = store.list_all().expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0], inserted);
}

#[test]
fn test_list_orders_by_date_then_created_at_desc() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    store
        .insert(&entry("2024-01-01", "january", 0.0))
        .expect("insert");
    store
        .insert(&entry("2024-03-01", "march", 0.0))
        .expect("insert");
    store
        .insert(&entry("2024-02-01", "february", 0.0))
        .expect("insert");

    let dates: Vec<NaiveDate> = store
        .list_all()
        .expect("list")
        .iter()
        .map(|e| e.date)
        .collect();
    assert_eq!(
        dates,
        vec![date("2024-03-01"), date("2024-02-01"), date("2024-01-01")]
    );
}

#[test]
fn test_same_date_ties_break_by_created_at_desc() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    store
        .insert(&entry("2024-05-05", "earlier", 0.0))
        .expect("insert");
    // Keep created_at strictly increasing across the tie.
    thread::sleep(Duration::from_millis(5));
    store
        .insert(&entry("2024-05-05", "later", 0.0))
        .expect("insert");

    let texts: Vec<String> = store
        .list_all()
        .expect("list")
        .iter()
        .map(|e| e.text.clone())
        .collect();
    assert_eq!(texts, vec!["later".to_string(), "earlier".to_string()]);
}

#[test]
fn test_stats_partitions_by_label() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    store
        .insert(&entry("2024-01-01", "up", 0.5))
        .expect("insert");
    store
        .insert(&entry("2024-01-02", "down", -0.5))
        .expect("insert");
    store
        .insert(&entry("2024-01-03", "flat", 0.0))
        .expect("insert");

    let stats = store.stats().expect("stats");
    assert_eq!(stats.total, 3);
    assert_eq!(stats.positive_count, 1);
    assert_eq!(stats.negative_count, 1);
    assert_eq!(stats.neutral_count, 1);
    assert_eq!(
        stats.positive_count + stats.negative_count + stats.neutral_count,
        stats.total
    );
    assert!(stats.avg_sentiment.abs() < 1e-9);
}

#[test]
fn test_entries_survive_reopen() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("journal.db");

    let first_id = {
        let store = SqliteStore::open(&path).expect("open");
        store
            .insert(&entry("2024-01-01", "persisted", 0.2))
            .expect("insert")
            .id
    };

    let store = SqliteStore::open(&path).expect("reopen");
    let entries = store.list_all().expect("list");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].text, "persisted");

    let next = store
        .insert(&entry("2024-01-02", "after reopen", 0.0))
        .expect("insert");
    assert!(next.id > first_id);
}
