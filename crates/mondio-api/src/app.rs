//! Application builder — wires repositories, services, and state into an
//! Axum app and runs it.

use std::sync::Arc;

use sqlx::PgPool;

use mondio_core::config::AppConfig;
use mondio_core::error::AppError;
use mondio_core::traits::media::MediaStore;
use mondio_database::repositories::{
    ActivationCodeRepository, DogRepository, SessionRepository, TrainerProfileRepository,
    TrainingRepository, UserRepository,
};
use mondio_storage::LocalMediaStore;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from configuration and a pool.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    // ── Media store ──────────────────────────────────────────────
    let media_store: Arc<dyn MediaStore> =
        Arc::new(LocalMediaStore::new(&config.storage.uploads_root()).await?);

    // ── Repositories ─────────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let code_repo = Arc::new(ActivationCodeRepository::new(db_pool.clone()));
    let trainer_repo = Arc::new(TrainerProfileRepository::new(db_pool.clone()));
    let dog_repo = Arc::new(DogRepository::new(db_pool.clone()));
    let training_repo = Arc::new(TrainingRepository::new(db_pool.clone()));
    let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────────
    let password_hasher = Arc::new(mondio_auth::password::PasswordHasher::new());
    let jwt_encoder = Arc::new(mondio_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(mondio_auth::jwt::decoder::JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────────
    let user_service = Arc::new(mondio_service::user::UserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&code_repo),
        Arc::clone(&trainer_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        config.auth.password_min_length,
    ));
    let activation_service = Arc::new(mondio_service::activation::ActivationCodeService::new(
        Arc::clone(&code_repo),
    ));
    let trainer_service = Arc::new(mondio_service::trainer::TrainerService::new(
        Arc::clone(&trainer_repo),
        Arc::clone(&user_repo),
        Arc::clone(&dog_repo),
    ));
    let dog_service = Arc::new(mondio_service::dog::DogService::new(Arc::clone(&dog_repo)));
    let training_service = Arc::new(mondio_service::training::TrainingService::new(Arc::clone(
        &training_repo,
    )));
    let session_service = Arc::new(mondio_service::session::SessionService::new(
        Arc::clone(&session_repo),
        Arc::clone(&dog_repo),
    ));
    let upload_service = Arc::new(mondio_service::upload::UploadService::new(
        Arc::clone(&media_store),
        Arc::clone(&user_repo),
        Arc::clone(&dog_repo),
        Arc::clone(&training_repo),
        Arc::clone(&session_repo),
        config.storage.clone(),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        user_repo,
        code_repo,
        trainer_repo,
        dog_repo,
        training_repo,
        session_repo,
        user_service,
        activation_service,
        trainer_service,
        dog_service,
        training_service,
        session_service,
        upload_service,
    })
}

/// Runs the Mondio server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool).await?;
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Mondio server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Mondio server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
