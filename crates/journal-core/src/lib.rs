//! # Journal Core
//!
//! Core library for the sentiment journal service: a small append-only
//! store of free-text entries, each scored for sentiment on insertion.
//!
//! This crate provides the domain model, sentiment classification, storage
//! abstractions, and aggregate statistics independent of the HTTP interface.
//!
//! ## Architecture
//!
//! - **storage**: Entry store trait and the SQLite implementation
//! - **sentiment**: Polarity scoring and label classification
//! - **stats**: Aggregate statistics over the store
//! - **error**: Error hierarchy shared by all core operations

pub mod error;
pub mod sentiment;
pub mod stats;
pub mod storage;

pub use error::{JournalError, Result};
pub use sentiment::{LexiconScorer, SentimentLabel, SentimentScorer};
pub use stats::{round3, StatsSnapshot};
pub use storage::{Entry, EntryStore, NewEntry, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
