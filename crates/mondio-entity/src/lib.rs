//! # mondio-entity
//!
//! Domain entity models for Mondio. Every struct in this crate represents a
//! database table row or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, `Deserialize`, and database entities additionally
//! derive `sqlx::FromRow`.

pub mod activation;
pub mod dog;
pub mod ownership;
pub mod session;
pub mod trainer;
pub mod training;
pub mod user;

pub use ownership::Owned;
