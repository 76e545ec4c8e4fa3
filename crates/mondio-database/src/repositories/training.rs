//! Training repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use mondio_core::error::{AppError, ErrorKind};
use mondio_core::result::AppResult;
use mondio_entity::training::{CreateTraining, Training, UpdateTraining};

/// Repository for training exercise CRUD.
#[derive(Debug, Clone)]
pub struct TrainingRepository {
    pool: PgPool,
}

impl TrainingRepository {
    /// Create a new training repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a training by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Training>> {
        sqlx::query_as::<_, Training>("SELECT * FROM trainings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find training by id", e)
            })
    }

    /// List trainings owned by a user, oldest first.
    pub async fn find_by_owner(&self, user_id: Uuid) -> AppResult<Vec<Training>> {
        sqlx::query_as::<_, Training>(
            "SELECT * FROM trainings WHERE user_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list trainings", e))
    }

    /// Create a new training.
    pub async fn create(&self, data: &CreateTraining) -> AppResult<Training> {
        sqlx::query_as::<_, Training>(
            "INSERT INTO trainings (user_id, name) VALUES ($1, $2) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create training", e))
    }

    /// Update a training's fields.
    pub async fn update(&self, id: Uuid, data: &UpdateTraining) -> AppResult<Training> {
        sqlx::query_as::<_, Training>(
            "UPDATE trainings SET name = COALESCE($2, name), updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update training", e))?
        .ok_or_else(|| AppError::not_found(format!("Training {id} not found")))
    }

    /// Update a training's demonstration video path.
    pub async fn update_video(&self, id: Uuid, video_url: &str) -> AppResult<Training> {
        sqlx::query_as::<_, Training>(
            "UPDATE trainings SET video_url = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(video_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update training video", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Training {id} not found")))
    }

    /// Count session entries that reference a training.
    pub async fn count_references(&self, id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM session_entries WHERE training_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count references", e)
            })
    }

    /// Delete a training by ID.
    ///
    /// The foreign key from session entries is RESTRICT; a violation maps
    /// to a conflict error in case a reference appeared after the service's
    /// pre-check.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM trainings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                    AppError::conflict("Training is used in sessions and cannot be deleted")
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to delete training", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
