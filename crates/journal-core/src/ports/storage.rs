//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;
use journal_types::{Entry, EntryPayload, ImageRecord, UserCredentials};
use std::path::PathBuf;

/// Persisted entry store
#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn create_entry(&self, payload: &EntryPayload) -> Result<Entry>;
    /// Fails with [`crate::JournalError::EntryNotFound`] when absent.
    async fn get_entry(&self, id: i64) -> Result<Entry>;
    async fn list_entries(&self) -> Result<Vec<Entry>>;
    /// Overwrites title, content and summary. Id and date are left alone.
    async fn update_entry(&self, id: i64, payload: &EntryPayload) -> Result<Entry>;
    /// Fails with [`crate::JournalError::EntryNotFound`] when absent.
    async fn delete_entry(&self, id: i64) -> Result<()>;
}

/// User account store
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with [`crate::JournalError::EmailTaken`] when the email is registered.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<UserCredentials>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserCredentials>>;
}

/// Image metadata store
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Inserts the record, or returns the existing one for the same
    /// `(entry_id, filename)`.
    async fn upsert_image(&self, record: &ImageRecord) -> Result<ImageRecord>;
    async fn get_image(&self, entry_id: i64, filename: &str) -> Result<Option<ImageRecord>>;
    async fn list_images(&self, entry_id: i64) -> Result<Vec<ImageRecord>>;
    /// Returns false when nothing matched.
    async fn delete_image(&self, entry_id: i64, filename: &str) -> Result<bool>;
}

/// Raw bytes keyed by an opaque name
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Writes `data` under `name`, replacing any previous contents.
    async fn put(&self, name: &str, data: Bytes) -> Result<PathBuf>;
    /// Returns false when the blob did not exist.
    async fn remove(&self, name: &str) -> Result<bool>;
    fn path_of(&self, name: &str) -> PathBuf;
}
