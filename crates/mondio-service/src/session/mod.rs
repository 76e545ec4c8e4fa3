//! Training session management operations.

pub mod service;

pub use service::{NewSession, SessionService};
