//! User registration, login, and profile operations.

use std::sync::Arc;

use tracing::{info, warn};

use mondio_auth::jwt::encoder::{IssuedToken, JwtEncoder};
use mondio_auth::password::PasswordHasher;
use mondio_core::error::AppError;
use mondio_core::result::AppResult;
use mondio_database::repositories::{
    ActivationCodeRepository, TrainerProfileRepository, UserRepository,
};
use mondio_entity::trainer::TrainerProfile;
use mondio_entity::user::{CreateUser, User};

use crate::context::RequestContext;

/// Result of a successful registration or login.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginResult {
    /// The authenticated user.
    pub user: User,
    /// The issued access token.
    pub token: IssuedToken,
}

/// A user profile with the optional trainer profile attached.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserProfile {
    /// The user row.
    pub user: User,
    /// The trainer profile, when the trainer role has been granted.
    pub trainer: Option<TrainerProfile>,
}

/// Handles registration, login, and profile reads.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Activation code repository.
    code_repo: Arc<ActivationCodeRepository>,
    /// Trainer profile repository.
    trainer_repo: Arc<TrainerProfileRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Token encoder.
    jwt_encoder: Arc<JwtEncoder>,
    /// Minimum password length from configuration.
    password_min_length: usize,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        code_repo: Arc<ActivationCodeRepository>,
        trainer_repo: Arc<TrainerProfileRepository>,
        hasher: Arc<PasswordHasher>,
        jwt_encoder: Arc<JwtEncoder>,
        password_min_length: usize,
    ) -> Self {
        Self {
            user_repo,
            code_repo,
            trainer_repo,
            hasher,
            jwt_encoder,
            password_min_length,
        }
    }

    /// Register a new user against a one-time activation code.
    ///
    /// The code is consumed first with a conditional UPDATE, so concurrent
    /// registrations on the same code cannot both win. If user creation
    /// fails afterwards the code is released back to the unused pool.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        activation_code: &str,
    ) -> AppResult<LoginResult> {
        let email = email.trim();
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        if password.len() < self.password_min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters",
                self.password_min_length
            )));
        }

        let code = self
            .code_repo
            .consume(activation_code.trim())
            .await?
            .ok_or_else(|| AppError::validation("Invalid or already used activation code"))?;

        let password_hash = self.hasher.hash_password(password)?;
        let create = CreateUser {
            email: email.to_string(),
            password_hash,
        };

        let user = match self.user_repo.create(&create).await {
            Ok(user) => user,
            Err(e) => {
                if let Err(release_err) = self.code_repo.release(code.id).await {
                    warn!(code_id = %code.id, error = %release_err, "Failed to release code");
                }
                return Err(e);
            }
        };

        self.code_repo.mark_used_by(code.id, user.id).await?;

        info!(user_id = %user.id, code_id = %code.id, "User registered");

        let token = self.jwt_encoder.generate_token(&user)?;
        Ok(LoginResult { user, token })
    }

    /// Authenticate a user by email and password.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        let user = self
            .user_repo
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        let valid = self.hasher.verify_password(password, &user.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        info!(user_id = %user.id, "User logged in");

        let token = self.jwt_encoder.generate_token(&user)?;
        Ok(LoginResult { user, token })
    }

    /// Get the current user's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> AppResult<UserProfile> {
        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let trainer = if user.is_trainer {
            self.trainer_repo.find_by_user_id(user.id).await?
        } else {
            None
        };

        Ok(UserProfile { user, trainer })
    }
}
