//! Entry store trait definition.
//!
//! The `EntryStore` trait defines the interface the HTTP layer depends on.
//! The abstraction keeps the persistence engine swappable and lets tests
//! inject their own store without touching the handlers.

use crate::error::Result;
use crate::stats::StatsSnapshot;

use super::types::{Entry, NewEntry};

/// Append-only entry store interface.
///
/// All implementations must ensure:
/// - Each insert is durable before it returns success
/// - Ids are store-assigned, strictly increasing, never reused
/// - No operation holds locks across calls
pub trait EntryStore: Send + Sync {
    /// Insert a new entry, assigning `id` and `created_at`.
    ///
    /// Returns the full persisted record.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Storage` if the underlying medium is
    /// unreachable or the write fails. The entry is either fully persisted
    /// or not persisted at all.
    fn insert(&self, new: &NewEntry) -> Result<Entry>;

    /// List all entries, ordered by `date` descending, ties broken by
    /// `created_at` descending.
    ///
    /// An empty store yields an empty vec, never an error.
    fn list_all(&self) -> Result<Vec<Entry>>;

    /// Total number of stored entries (0 on an empty store).
    fn count(&self) -> Result<i64>;

    /// Aggregate statistics over all entries.
    ///
    /// An empty store yields the all-zero snapshot.
    fn stats(&self) -> Result<StatsSnapshot>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_store(_store: &dyn EntryStore) {}
    }
}
