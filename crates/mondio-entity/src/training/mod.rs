//! Training exercise domain entities.

pub mod model;

pub use model::{CreateTraining, Training, UpdateTraining};
