//! Media store trait for uploaded photos and videos.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;

use crate::result::AppResult;

/// A byte stream type used for reading stored media.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, std::io::Error>> + Send>>;

/// Trait for the media storage backend.
///
/// The [`MediaStore`] trait is defined here in `mondio-core` and implemented
/// over the local filesystem in `mondio-storage`. Paths are relative to the
/// store root and are the values persisted in the `*_url` entity columns.
#[async_trait]
pub trait MediaStore: Send + Sync + std::fmt::Debug + 'static {
    /// Check whether the store is healthy and writable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes to the given relative path.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Open a stored object as a byte stream.
    async fn read(&self, path: &str) -> AppResult<ByteStream>;

    /// Delete a stored object. Missing objects are not an error.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether an object exists at the given relative path.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
