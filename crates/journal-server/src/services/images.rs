//! Image attachment service
//!
//! Metadata lives in an [`ImageStore`], bytes in a [`BlobStore`] under an
//! opaque generated name. Neither checks that the entry exists.

use bytes::Bytes;
use chrono::Utc;
use journal_core::ports::{BlobStore, ImageStore};
use journal_core::validate::{extension_of, validate_filename};
use journal_core::{ImageRecord, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub struct ImageService {
    index: Arc<dyn ImageStore>,
    blobs: Arc<dyn BlobStore>,
}

impl ImageService {
    pub fn new(index: Arc<dyn ImageStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { index, blobs }
    }

    /// Store `data` as `filename` for `entry_id`, replacing the bytes of an
    /// earlier upload with the same name.
    pub async fn upload(&self, entry_id: i64, filename: &str, data: Bytes) -> Result<ImageRecord> {
        validate_filename(filename)?;

        let id = uuid::Uuid::new_v4().to_string();
        let candidate = ImageRecord {
            stored_name: format!("{}{}", id, extension_of(filename)),
            id,
            entry_id,
            filename: filename.to_string(),
            created_at: Utc::now(),
        };

        let record = self.index.upsert_image(&candidate).await?;
        let size = data.len();
        let path = match self.blobs.put(&record.stored_name, data).await {
            Ok(path) => path,
            Err(e) => {
                // A fresh row must not outlive its missing bytes.
                if record.id == candidate.id {
                    self.index.delete_image(entry_id, filename).await?;
                }
                return Err(e);
            }
        };

        info!(
            "Stored image {} for entry {} ({} bytes) at {}",
            record.filename,
            entry_id,
            size,
            path.display()
        );
        Ok(record)
    }

    /// Remove the image. Returns false when no such image was uploaded.
    pub async fn delete(&self, entry_id: i64, filename: &str) -> Result<bool> {
        let Some(record) = self.index.get_image(entry_id, filename).await? else {
            return Ok(false);
        };

        self.blobs.remove(&record.stored_name).await?;
        let removed = self.index.delete_image(entry_id, filename).await?;

        info!("Deleted image {} for entry {}", filename, entry_id);
        Ok(removed)
    }

    pub async fn list(&self, entry_id: i64) -> Result<Vec<ImageRecord>> {
        self.index.list_images(entry_id).await
    }

    pub fn path_of(&self, record: &ImageRecord) -> PathBuf {
        self.blobs.path_of(&record.stored_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Database, ImageDirectory};
    use journal_core::JournalError;
    use tempfile::TempDir;

    async fn service() -> (ImageService, TempDir) {
        let dir = TempDir::new().unwrap();
        let db = Database::new(&dir.path().join("images.db")).await.unwrap();
        let blobs = ImageDirectory::open(dir.path().join("images")).await.unwrap();
        (ImageService::new(Arc::new(db), Arc::new(blobs)), dir)
    }

    #[tokio::test]
    async fn test_upload_then_delete() {
        let (images, _dir) = service().await;

        let record = images
            .upload(1, "a.png", Bytes::from_static(b"\x89PNG"))
            .await
            .unwrap();
        assert_eq!(record.filename, "a.png");
        assert!(record.stored_name.ends_with(".png"));
        assert_eq!(tokio::fs::read(images.path_of(&record)).await.unwrap(), b"\x89PNG");

        assert!(images.delete(1, "a.png").await.unwrap());
        assert!(!images.path_of(&record).exists());
        assert!(!images.delete(1, "a.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_reupload_overwrites_in_place() {
        let (images, _dir) = service().await;

        let first = images.upload(1, "a.png", Bytes::from_static(b"old")).await.unwrap();
        let second = images.upload(1, "a.png", Bytes::from_static(b"new")).await.unwrap();

        assert_eq!(first.stored_name, second.stored_name);
        assert_eq!(images.list(1).await.unwrap().len(), 1);
        assert_eq!(tokio::fs::read(images.path_of(&second)).await.unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_same_filename_for_different_entries() {
        let (images, _dir) = service().await;

        let one = images.upload(1, "a.png", Bytes::from_static(b"1")).await.unwrap();
        let two = images.upload(2, "a.png", Bytes::from_static(b"2")).await.unwrap();

        assert_ne!(one.stored_name, two.stored_name);
        assert!(images.delete(1, "a.png").await.unwrap());
        let remaining: Vec<String> = images
            .list(2)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.stored_name)
            .collect();
        assert_eq!(remaining, vec![two.stored_name]);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_no_record() {
        let (images, dir) = service().await;
        tokio::fs::remove_dir_all(dir.path().join("images")).await.unwrap();

        let err = images
            .upload(1, "a.png", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert!(matches!(err, JournalError::Io(_)));
        assert!(images.list(1).await.unwrap().is_empty());
        assert!(!images.delete(1, "a.png").await.unwrap());
    }

    #[tokio::test]
    async fn test_path_traversal_is_rejected() {
        let (images, _dir) = service().await;

        let err = images
            .upload(1, "../escape.png", Bytes::from_static(b"x"))
            .await
            .unwrap_err();
        assert!(matches!(err, JournalError::InvalidFilename(_)));
    }
}
