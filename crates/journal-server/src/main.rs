//! Journal Server (persisted)
//!
//! Entries and users in SQLite, image attachments in a local directory.

use anyhow::{Context, Result};
use journal_server::config::{ServerConfig, JOURNAL_BIND_ADDRESS};
use journal_server::storage::{Database, ImageDirectory};
use journal_server::{init_tracing, journal_router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = init_tracing() {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Journal Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config =
        ServerConfig::load(JOURNAL_BIND_ADDRESS).context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, db={}, images={}",
        config.bind_address,
        config.database_path().display(),
        config.image_dir().display()
    );

    tokio::fs::create_dir_all(&config.data_dir)
        .await
        .with_context(|| format!("Failed to create data directory {}", config.data_dir.display()))?;

    let db = Arc::new(
        Database::new(&config.database_path())
            .await
            .context("Failed to initialize database")?,
    );
    let images = Arc::new(
        ImageDirectory::open(config.image_dir())
            .await
            .context("Failed to open image directory")?,
    );

    let app = journal_router(AppState::new(db, images));

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
