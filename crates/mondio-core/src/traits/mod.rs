//! Core traits defined in `mondio-core` and implemented by other crates.

pub mod media;

pub use media::MediaStore;
