//! Shared application state for the HTTP layer.

use std::sync::Arc;

use journal_core::{EntryStore, SentimentScorer};

/// Handles injected into every request handler.
///
/// Cloning is cheap; the store and scorer are shared behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
    pub scorer: Arc<dyn SentimentScorer>,
}

impl AppState {
    pub fn new(store: Arc<dyn EntryStore>, scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { store, scorer }
    }
}
