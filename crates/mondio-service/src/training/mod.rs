//! Training exercise management operations.

pub mod service;

pub use service::TrainingService;
