//! Error types for journal core operations.
//!
//! Errors are descriptive at the core level; the API layer maps them to
//! HTTP status codes and client-facing messages in one place.

use thiserror::Error;

/// Result type alias for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Invalid client input (missing or empty text, malformed date)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persistence layer failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// External sentiment scorer failure
    #[error("Classification error: {0}")]
    Classification(String),
}

impl From<rusqlite::Error> for JournalError {
    fn from(err: rusqlite::Error) -> Self {
        JournalError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Storage(err.to_string())
    }
}
