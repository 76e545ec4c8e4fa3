//! Local filesystem media store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tokio_util::io::ReaderStream;
use tracing::debug;

use mondio_core::error::{AppError, ErrorKind};
use mondio_core::result::AppResult;
use mondio_core::traits::media::{ByteStream, MediaStore};

/// Local filesystem media store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct LocalMediaStore {
    /// Root directory for all stored media.
    root: PathBuf,
}

impl LocalMediaStore {
    /// Create a new media store rooted at the given path.
    pub async fn new(root_path: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create media root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// Resolve a relative path to an absolute path within the root.
    ///
    /// Rejects traversal components so a stored path can never escape the
    /// media root.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let clean = path.trim_start_matches('/');
        if clean
            .split('/')
            .any(|part| part == ".." || part.is_empty())
        {
            return Err(AppError::validation(format!("Invalid media path: {path}")));
        }
        Ok(self.root.join(clean))
    }

    /// Ensure the parent directory of a path exists.
    async fn ensure_parent(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create parent directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    async fn health_check(&self) -> AppResult<bool> {
        Ok(self.root.exists() && self.root.is_dir())
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        self.ensure_parent(&full_path).await?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write media: {path}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Wrote media file");
        Ok(())
    }

    async fn read(&self, path: &str) -> AppResult<ByteStream> {
        let full_path = self.resolve(path)?;
        let file = fs::File::open(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Media not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to open media: {path}"),
                    e,
                )
            }
        })?;

        let stream = ReaderStream::new(file);
        Ok(Box::pin(stream))
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete media: {path}"),
                e,
            )),
        }
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        let full_path = self.resolve(path)?;
        Ok(fs::try_exists(&full_path).await.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> LocalMediaStore {
        let dir = std::env::temp_dir().join(format!("mondio-media-{}", uuid::Uuid::new_v4()));
        LocalMediaStore::new(dir.to_str().unwrap()).await.unwrap()
    }

    #[tokio::test]
    async fn test_write_read_delete() {
        let store = temp_store().await;
        store
            .write("dogs/abc/photo.jpg", Bytes::from_static(b"jpeg-bytes"))
            .await
            .unwrap();

        assert!(store.exists("dogs/abc/photo.jpg").await.unwrap());

        store.delete("dogs/abc/photo.jpg").await.unwrap();
        assert!(!store.exists("dogs/abc/photo.jpg").await.unwrap());

        // Deleting again is not an error.
        store.delete("dogs/abc/photo.jpg").await.unwrap();
    }

    #[tokio::test]
    async fn test_traversal_rejected() {
        let store = temp_store().await;
        assert!(store
            .write("../escape.bin", Bytes::from_static(b"x"))
            .await
            .is_err());
        assert!(store.read("a/../../etc/passwd").await.is_err());
    }
}
