//! Activation code generation and management.

pub mod generator;
pub mod service;

pub use generator::{CodeGenerator, CodeOutcome, CodeStore, CODE_ALPHABET, CODE_LENGTH};
pub use service::ActivationCodeService;
