//! Route definitions for the Mondio HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_video_size_bytes as usize;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(activation_routes())
        .merge(dog_routes())
        .merge(training_routes())
        .merge(session_routes())
        .merge(trainer_routes())
        .merge(upload_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Public auth endpoints: register, login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login))
}

/// Current-user endpoint
fn user_routes() -> Router<AppState> {
    Router::new().route("/user", get(handlers::user::get_profile))
}

/// Activation code administration
fn activation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/activation-codes/generate",
            post(handlers::activation::generate),
        )
        .route("/activation-codes", get(handlers::activation::list))
        .route("/activation-codes/{id}", delete(handlers::activation::revoke))
}

/// Dog CRUD
fn dog_routes() -> Router<AppState> {
    Router::new()
        .route("/dogs", get(handlers::dog::list))
        .route("/dogs", post(handlers::dog::create))
        .route("/dogs/{id}", put(handlers::dog::update))
        .route("/dogs/{id}", delete(handlers::dog::delete))
}

/// Training CRUD
fn training_routes() -> Router<AppState> {
    Router::new()
        .route("/trainings", get(handlers::training::list))
        .route("/trainings", post(handlers::training::create))
        .route("/trainings/{id}", put(handlers::training::update))
        .route("/trainings/{id}", delete(handlers::training::delete))
}

/// Session CRUD, entries, trainer notes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", get(handlers::session::list))
        .route("/sessions", post(handlers::session::create))
        .route("/sessions/{id}", put(handlers::session::update))
        .route("/sessions/{id}", delete(handlers::session::delete))
        .route(
            "/sessions/{id}/entries/{entry_id}",
            delete(handlers::session::delete_entry),
        )
        .route(
            "/sessions/{id}/entries/{entry_id}/trainer-note",
            put(handlers::session::add_trainer_note),
        )
}

/// Trainer profile and assignment
fn trainer_routes() -> Router<AppState> {
    Router::new()
        .route("/trainer/profile", get(handlers::trainer::get_profile))
        .route("/trainer/profile", post(handlers::trainer::create_profile))
        .route("/trainer/profile", put(handlers::trainer::update_profile))
        .route("/trainer/users", get(handlers::trainer::list_clients))
        .route(
            "/trainer/assign/dog/{dog_id}",
            post(handlers::trainer::assign_dog),
        )
        .route(
            "/trainer/assign/dog/{dog_id}",
            delete(handlers::trainer::unassign_dog),
        )
}

/// Media upload and serving
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/upload/user/photo", post(handlers::upload::user_photo))
        .route("/upload/dog/{id}/photo", post(handlers::upload::dog_photo))
        .route(
            "/upload/training/{id}/video",
            post(handlers::upload::training_video),
        )
        .route(
            "/upload/session/{id}/video",
            post(handlers::upload::session_video),
        )
        .route(
            "/upload/entry/{id}/video",
            post(handlers::upload::entry_video),
        )
        .route("/uploads/{*path}", get(handlers::upload::serve_media))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
