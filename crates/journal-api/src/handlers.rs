//! Request handlers for the journal API routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Local, NaiveDate};
use serde_json::{json, Value};

use journal_core::NewEntry;

use crate::dto::{CreateEntryRequest, EntryResponse, StatsResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/health` — liveness probe, no dependency checks.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// `POST /api/entries` — classify, persist, and return the new entry.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<(StatusCode, Json<EntryResponse>), ApiError> {
    let text = request
        .text
        .ok_or_else(|| ApiError::Validation("Text is required".to_string()))?;
    let text = text.trim();
    if text.is_empty() {
        return Err(ApiError::Validation("Text cannot be empty".to_string()));
    }

    let date = match request.date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
            ApiError::Validation(format!("Invalid date (expected YYYY-MM-DD): {}", raw))
        })?,
        None => Local::now().date_naive(),
    };

    let score = state.scorer.score(text)?;
    let new_entry = NewEntry::new(date, text, score)?;
    let entry = state.store.insert(&new_entry)?;
    log::debug!(
        "Created entry {} ({} {})",
        entry.id,
        entry.sentiment_label,
        entry.sentiment_score
    );

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// `GET /api/entries` — all entries, most recently dated first.
pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<EntryResponse>>, ApiError> {
    let entries = state.store.list_all()?;
    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

/// `GET /api/stats` — aggregate statistics over all entries.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let stats = state.store.stats()?;
    Ok(Json(stats.into()))
}
