//! User registration, login, and profile operations.

pub mod service;

pub use service::{LoginResult, UserProfile, UserService};
