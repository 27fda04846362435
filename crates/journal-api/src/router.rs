//! Router assembly: routes, CORS, and injected state.

use axum::http::{header, HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::handlers::{create_entry, get_stats, health, list_entries};
use crate::state::AppState;

/// Build the API router.
///
/// `allowed_origins` is the CORS allowlist; requests from other origins
/// are refused by the browser, not the server.
pub fn create_router(state: AppState, allowed_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/entries", get(list_entries).post(create_entry))
        .route("/api/stats", get(get_stats))
        .layer(cors)
        .with_state(state)
}
