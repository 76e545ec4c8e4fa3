//! Trainer profile domain entities.

pub mod model;

pub use model::{CreateTrainerProfile, TrainerProfile, UpdateTrainerProfile};
