//! # mondio-storage
//!
//! Local filesystem implementation of the [`MediaStore`] trait from
//! `mondio-core`. Uploaded photos and videos live under the configured
//! uploads root; the relative paths are what gets persisted in the
//! entities' `*_url` columns.
//!
//! [`MediaStore`]: mondio_core::traits::MediaStore

pub mod local;

pub use local::LocalMediaStore;
