//! # mondio-api
//!
//! HTTP API layer for Mondio built on Axum.
//!
//! Provides all REST endpoints, middleware (auth, CORS, tracing), the
//! `AuthUser` extractor, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
