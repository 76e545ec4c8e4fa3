//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use mondio_auth::jwt::decoder::JwtDecoder;
use mondio_auth::jwt::encoder::JwtEncoder;
use mondio_auth::password::PasswordHasher;
use mondio_core::config::AppConfig;

use mondio_database::repositories::{
    ActivationCodeRepository, DogRepository, SessionRepository, TrainerProfileRepository,
    TrainingRepository, UserRepository,
};

use mondio_service::activation::ActivationCodeService;
use mondio_service::dog::DogService;
use mondio_service::session::SessionService;
use mondio_service::trainer::TrainerService;
use mondio_service::training::TrainingService;
use mondio_service::upload::UploadService;
use mondio_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Activation code repository
    pub code_repo: Arc<ActivationCodeRepository>,
    /// Trainer profile repository
    pub trainer_repo: Arc<TrainerProfileRepository>,
    /// Dog repository
    pub dog_repo: Arc<DogRepository>,
    /// Training repository
    pub training_repo: Arc<TrainingRepository>,
    /// Session repository
    pub session_repo: Arc<SessionRepository>,

    // ── Services ─────────────────────────────────────────────
    /// User registration/login/profile service
    pub user_service: Arc<UserService>,
    /// Activation code administration service
    pub activation_service: Arc<ActivationCodeService>,
    /// Trainer role and client service
    pub trainer_service: Arc<TrainerService>,
    /// Dog service
    pub dog_service: Arc<DogService>,
    /// Training service
    pub training_service: Arc<TrainingService>,
    /// Session service
    pub session_service: Arc<SessionService>,
    /// Media upload service
    pub upload_service: Arc<UploadService>,
}
