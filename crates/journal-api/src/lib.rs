//! HTTP API for the sentiment journal service.
//!
//! This crate exposes the journal-core library as a small REST API:
//!
//! - HTTP layer (axum handlers): request parsing and validation, JSON
//!   serialization, CORS, error translation
//! - Core layer (journal-core): sentiment classification, persistence,
//!   aggregate statistics
//!
//! The storage engine and sentiment scorer are injected handles carried in
//! [`state::AppState`]; their lifecycle is owned by the process entry
//! point, not ambient globals.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
