//! Media upload operations.

pub mod service;

pub use service::{MediaKind, UploadService};
