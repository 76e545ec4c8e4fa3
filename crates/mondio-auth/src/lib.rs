//! # mondio-auth
//!
//! Authentication and authorization for Mondio.
//!
//! ## Modules
//!
//! - `jwt` — JWT token creation and validation
//! - `password` — Argon2id password hashing
//! - `access` — ownership and trainer-role predicates

pub mod access;
pub mod jwt;
pub mod password;

pub use access::{can_add_trainer_note, can_mutate, is_client_dog, is_own_dog, Actor};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
