//! Journal Server
//!
//! HTTP front ends for the two journal backends:
//!
//! - the ephemeral service keeps entries in process memory and loses them on
//!   restart;
//! - the persisted service stores entries and users in SQLite and image
//!   attachments in a local directory.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;
pub mod storage;

#[cfg(test)]
mod testing;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use journal_core::ports::EntryStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use services::{AuthService, ImageService};
use storage::{Database, ImageDirectory, MemoryEntryStore};

/// Application state shared across handlers of the persisted service
#[derive(Clone)]
pub struct AppState {
    pub entries: Arc<dyn EntryStore>,
    pub auth_service: Arc<AuthService>,
    pub image_service: Arc<ImageService>,
}

impl AppState {
    pub fn new(db: Arc<Database>, images: Arc<ImageDirectory>) -> Self {
        Self {
            entries: db.clone(),
            auth_service: Arc::new(AuthService::new(db.clone())),
            image_service: Arc::new(ImageService::new(db, images)),
        }
    }
}

/// Install the global fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Router for the ephemeral service
pub fn memory_router(store: Arc<MemoryEntryStore>) -> Router {
    use handlers::memory;

    let collection = get(memory::list).post(memory::create);
    let item = get(memory::get).put(memory::update).delete(memory::delete);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/entries", collection.clone())
        .route("/entries/", collection)
        .route("/entries/:id", item)
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

/// Router for the persisted service
pub fn journal_router(state: AppState) -> Router {
    use handlers::{auth, entries, images};

    let collection = get(entries::list).post(entries::create);
    let item = get(entries::get).put(entries::update).delete(entries::delete);
    // Uploads are not size-limited
    let gallery = get(images::list)
        .post(images::upload)
        .layer(DefaultBodyLimit::disable());

    Router::new()
        .route("/health", get(handlers::health))
        .route("/register", post(auth::register))
        .route("/register/", post(auth::register))
        .route("/login", post(auth::login))
        .route("/login/", post(auth::login))
        .route("/reset-password", post(auth::reset_password))
        .route("/reset-password/", post(auth::reset_password))
        .route("/entries", collection.clone())
        .route("/entries/", collection)
        .route("/entries/:id", item)
        .route("/entries/:id/images", gallery.clone())
        .route("/entries/:id/images/", gallery)
        .route("/entries/:id/images/:filename", delete(images::delete))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
