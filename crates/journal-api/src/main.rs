//! journal-api - HTTP server for the sentiment journal.
//!
//! Opens the entry store once at startup, wires it into the router state,
//! and serves the REST API until the process is stopped.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use clap::Parser;

use journal_api::{create_router, AppState};
use journal_core::{LexiconScorer, SqliteStore, VERSION};

/// Local development origins allowed by default.
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:5500",
    "http://127.0.0.1:5500",
];

/// Sentiment journal API server
#[derive(Parser)]
#[command(name = "journal-api")]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Path to the journal database file
    #[arg(long, env = "JOURNAL_DB", default_value = "journal.db")]
    db: PathBuf,

    /// Address to listen on
    #[arg(long, env = "JOURNAL_ADDR", default_value = "127.0.0.1:5000")]
    addr: SocketAddr,

    /// Allowed CORS origin (repeatable; defaults to the local dev origins)
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let origins = if cli.cors_origins.is_empty() {
        DEFAULT_CORS_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        cli.cors_origins
    };
    let origins = parse_origins(&origins)?;

    let store = SqliteStore::open(&cli.db)
        .with_context(|| format!("Failed to open journal database at {}", cli.db.display()))?;
    log::info!("Journal database: {}", cli.db.display());

    let state = AppState::new(Arc::new(store), Arc::new(LexiconScorer::new()));
    let app = create_router(state, origins);

    let listener = tokio::net::TcpListener::bind(cli.addr)
        .await
        .with_context(|| format!("Failed to bind {}", cli.addr))?;
    log::info!("journal-api v{} listening on {}", VERSION, cli.addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn parse_origins(origins: &[String]) -> anyhow::Result<Vec<HeaderValue>> {
    origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("Invalid CORS origin {}: {}", origin, e))
        })
        .collect()
}
