//! Dog repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use mondio_core::error::{AppError, ErrorKind};
use mondio_core::result::AppResult;
use mondio_entity::dog::{CreateDog, Dog, UpdateDog};

/// Repository for dog CRUD and visibility queries.
#[derive(Debug, Clone)]
pub struct DogRepository {
    pool: PgPool,
}

impl DogRepository {
    /// Create a new dog repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a dog by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Dog>> {
        sqlx::query_as::<_, Dog>("SELECT * FROM dogs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find dog by id", e))
    }

    /// List dogs visible to a user: owned or assigned as trainer.
    ///
    /// This is the query-level visibility filter; mutation rights are
    /// decided separately by ownership alone.
    pub async fn find_visible_to(&self, user_id: Uuid) -> AppResult<Vec<Dog>> {
        sqlx::query_as::<_, Dog>(
            "SELECT * FROM dogs WHERE user_id = $1 OR trainer_id = $1 ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list dogs", e))
    }

    /// List dogs owned by a user.
    pub async fn find_by_owner(&self, user_id: Uuid) -> AppResult<Vec<Dog>> {
        sqlx::query_as::<_, Dog>("SELECT * FROM dogs WHERE user_id = $1 ORDER BY created_at ASC")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list dogs by owner", e)
            })
    }

    /// Create a new dog.
    pub async fn create(&self, data: &CreateDog) -> AppResult<Dog> {
        sqlx::query_as::<_, Dog>(
            "INSERT INTO dogs (user_id, name, breed, age, level) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.name)
        .bind(&data.breed)
        .bind(data.age)
        .bind(data.level)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create dog", e))
    }

    /// Update a dog's profile fields.
    pub async fn update(&self, id: Uuid, data: &UpdateDog) -> AppResult<Dog> {
        sqlx::query_as::<_, Dog>(
            "UPDATE dogs SET name = COALESCE($2, name), \
                             breed = COALESCE($3, breed), \
                             age = COALESCE($4, age), \
                             level = COALESCE($5, level), \
                             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.breed)
        .bind(data.age)
        .bind(data.level)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update dog", e))?
        .ok_or_else(|| AppError::not_found(format!("Dog {id} not found")))
    }

    /// Update a dog's photo path.
    pub async fn update_photo(&self, id: Uuid, photo_url: &str) -> AppResult<Dog> {
        sqlx::query_as::<_, Dog>(
            "UPDATE dogs SET photo_url = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(photo_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update dog photo", e))?
        .ok_or_else(|| AppError::not_found(format!("Dog {id} not found")))
    }

    /// Assign a trainer to a dog.
    pub async fn assign_trainer(&self, id: Uuid, trainer_id: Uuid) -> AppResult<Dog> {
        sqlx::query_as::<_, Dog>(
            "UPDATE dogs SET trainer_id = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(trainer_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to assign trainer", e))?
        .ok_or_else(|| AppError::not_found(format!("Dog {id} not found")))
    }

    /// Remove a trainer assignment. Only the assigned trainer is removed;
    /// a different trainer's assignment is left untouched.
    pub async fn unassign_trainer(&self, id: Uuid, trainer_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE dogs SET trainer_id = NULL, updated_at = NOW() \
             WHERE id = $1 AND trainer_id = $2",
        )
        .bind(id)
        .bind(trainer_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to unassign trainer", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a dog by ID. Sessions logged against the dog cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete dog", e))?;

        Ok(result.rows_affected() > 0)
    }
}
