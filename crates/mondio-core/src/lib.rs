//! # mondio-core
//!
//! Core crate for Mondio. Contains configuration schemas, the media storage
//! trait, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Mondio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
