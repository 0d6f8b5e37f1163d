//! Journal Server (ephemeral)
//!
//! Entries live in process memory only and are gone after a restart.

use anyhow::{Context, Result};
use journal_server::config::{ServerConfig, MEMORY_BIND_ADDRESS};
use journal_server::storage::MemoryEntryStore;
use journal_server::{init_tracing, memory_router};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting Journal Server (in-memory) v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = ServerConfig::load(MEMORY_BIND_ADDRESS).context("Failed to load configuration")?;
    warn!("Entries are kept in memory and will be lost on shutdown");

    let app = memory_router(Arc::new(MemoryEntryStore::new()));

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
