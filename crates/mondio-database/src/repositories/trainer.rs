//! Trainer profile repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use mondio_core::error::{AppError, ErrorKind};
use mondio_core::result::AppResult;
use mondio_entity::trainer::{CreateTrainerProfile, TrainerProfile, UpdateTrainerProfile};

/// Repository for trainer profiles.
#[derive(Debug, Clone)]
pub struct TrainerProfileRepository {
    pool: PgPool,
}

impl TrainerProfileRepository {
    /// Create a new trainer profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the profile belonging to a user.
    pub async fn find_by_user_id(&self, user_id: Uuid) -> AppResult<Option<TrainerProfile>> {
        sqlx::query_as::<_, TrainerProfile>("SELECT * FROM trainer_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find trainer profile", e)
            })
    }

    /// Create a trainer profile. A user may have at most one.
    pub async fn create(&self, data: &CreateTrainerProfile) -> AppResult<TrainerProfile> {
        sqlx::query_as::<_, TrainerProfile>(
            "INSERT INTO trainer_profiles (user_id, name, bio) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.bio)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("trainer_profiles_user_id_key") =>
            {
                AppError::conflict("Trainer profile already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create trainer profile", e),
        })
    }

    /// Update a user's trainer profile fields.
    pub async fn update(
        &self,
        user_id: Uuid,
        data: &UpdateTrainerProfile,
    ) -> AppResult<TrainerProfile> {
        sqlx::query_as::<_, TrainerProfile>(
            "UPDATE trainer_profiles SET name = COALESCE($2, name), \
                                         bio = COALESCE($3, bio), \
                                         updated_at = NOW() \
             WHERE user_id = $1 RETURNING *",
        )
        .bind(user_id)
        .bind(&data.name)
        .bind(&data.bio)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update trainer profile", e)
        })?
        .ok_or_else(|| AppError::not_found("Trainer profile not found"))
    }
}
