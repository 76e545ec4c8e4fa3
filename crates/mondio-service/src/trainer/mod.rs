//! Trainer role and client management operations.

pub mod service;

pub use service::{ClientSummary, TrainerService, TrainerStatus};
