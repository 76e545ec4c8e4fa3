//! Dog management operations.

pub mod service;

pub use service::{DogService, NewDog};
