//! Keep-alive HTTP server.
//!
//! Free hosting platforms put idle processes to sleep; an external pinger
//! hitting `/` keeps the bot awake. `/health` adds a liveness probe with
//! version metadata.

use std::net::SocketAddr;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::info;

use warden_core::config::KeepaliveConfig;
use warden_core::{Result, WardenError};

async fn root() -> &'static str {
    "🤖 Bot is running!"
}

/// GET /health — liveness probe, returns server metadata.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Bind and serve until the process exits.
pub async fn serve(config: &KeepaliveConfig) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.bind, config.port)
        .parse()
        .map_err(|e: std::net::AddrParseError| WardenError::Config(e.to_string()))?;

    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    info!("keep-alive server listening on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
