//! Activation code domain entities.

pub mod model;

pub use model::ActivationCode;
