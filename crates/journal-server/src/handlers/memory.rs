//! Entry handlers for the ephemeral service
//!
//! A missing entry is reported as `{"error": "Entry not found"}` with a 200
//! status rather than an HTTP error.

use crate::storage::MemoryEntryStore;
use axum::{
    extract::{Path, State},
    Json,
};
use journal_types::{BasicEntry, EntryEnvelope, ErrorResponse, MessageResponse};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub type SoftResult<T> = Result<Json<T>, Json<ErrorResponse>>;

fn not_found(id: i64) -> Json<ErrorResponse> {
    warn!("Entry {} not found", id);
    Json(ErrorResponse::new("Entry not found"))
}

pub async fn create(
    State(store): State<Arc<MemoryEntryStore>>,
    Json(entry): Json<BasicEntry>,
) -> Json<EntryEnvelope<BasicEntry>> {
    info!("Creating entry {}", entry.id);
    let entry = store.create(entry).await;

    Json(EntryEnvelope {
        message: "Entry created".to_string(),
        entry,
    })
}

pub async fn list(State(store): State<Arc<MemoryEntryStore>>) -> Json<Vec<BasicEntry>> {
    Json(store.list().await)
}

pub async fn get(
    State(store): State<Arc<MemoryEntryStore>>,
    Path(id): Path<i64>,
) -> SoftResult<BasicEntry> {
    debug!("Fetching entry {}", id);
    store.get(id).await.map(Json).ok_or_else(|| not_found(id))
}

pub async fn update(
    State(store): State<Arc<MemoryEntryStore>>,
    Path(id): Path<i64>,
    Json(entry): Json<BasicEntry>,
) -> SoftResult<EntryEnvelope<BasicEntry>> {
    let entry = store.update(id, entry).await.ok_or_else(|| not_found(id))?;
    info!("Updated entry {}", id);

    Ok(Json(EntryEnvelope {
        message: "Entry updated".to_string(),
        entry,
    }))
}

pub async fn delete(
    State(store): State<Arc<MemoryEntryStore>>,
    Path(id): Path<i64>,
) -> Json<MessageResponse> {
    let removed = store.delete(id).await;
    info!("Deleted entry {} ({} removed)", id, removed);

    Json(MessageResponse::new("Entry deleted"))
}
