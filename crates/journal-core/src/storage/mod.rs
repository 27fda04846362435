//! Storage layer: entry store trait and implementations.

mod sqlite;
mod traits;
mod types;

pub use sqlite::SqliteStore;
pub use traits::EntryStore;
pub use types::{Entry, NewEntry};
