//! Flat directory holding uploaded image bytes

use async_trait::async_trait;
use bytes::Bytes;
use journal_core::ports::BlobStore;
use journal_core::Result;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct ImageDirectory {
    root: PathBuf,
}

impl ImageDirectory {
    /// Open the directory, creating it if needed.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root).await?;
        tracing::info!("Image directory: {}", root.display());
        Ok(Self { root })
    }
}

#[async_trait]
impl BlobStore for ImageDirectory {
    async fn put(&self, name: &str, data: Bytes) -> Result<PathBuf> {
        let path = self.path_of(name);
        tokio::fs::write(&path, &data).await?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
        Ok(path)
    }

    async fn remove(&self, name: &str) -> Result<bool> {
        match tokio::fs::remove_file(self.path_of(name)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
