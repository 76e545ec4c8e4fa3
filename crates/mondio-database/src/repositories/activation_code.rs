//! Activation code repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use mondio_core::error::{AppError, ErrorKind};
use mondio_core::result::AppResult;
use mondio_core::types::pagination::{PageRequest, PageResponse};
use mondio_entity::activation::ActivationCode;

/// Repository for activation code storage.
///
/// Inserts rely on the `activation_codes_code_key` unique constraint rather
/// than a read-then-write pair; a duplicate insert surfaces as a conflict
/// error, which the generator treats as its retry trigger.
#[derive(Debug, Clone)]
pub struct ActivationCodeRepository {
    pool: PgPool,
}

impl ActivationCodeRepository {
    /// Create a new activation code repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a freshly drawn code.
    ///
    /// Returns a conflict error when the code value already exists.
    pub async fn insert(&self, code: &str) -> AppResult<ActivationCode> {
        sqlx::query_as::<_, ActivationCode>(
            "INSERT INTO activation_codes (code) VALUES ($1) RETURNING *",
        )
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("activation_codes_code_key") =>
            {
                AppError::conflict(format!("Code '{code}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert code", e),
        })
    }

    /// Find a code record by its value.
    pub async fn find_by_code(&self, code: &str) -> AppResult<Option<ActivationCode>> {
        sqlx::query_as::<_, ActivationCode>("SELECT * FROM activation_codes WHERE code = $1")
            .bind(code)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find code", e))
    }

    /// Find a code record by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ActivationCode>> {
        sqlx::query_as::<_, ActivationCode>("SELECT * FROM activation_codes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find code by id", e))
    }

    /// List all codes, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<ActivationCode>> {
        sqlx::query_as::<_, ActivationCode>(
            "SELECT * FROM activation_codes ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list codes", e))
    }

    /// List codes with pagination, newest first.
    pub async fn find_page(&self, page: &PageRequest) -> AppResult<PageResponse<ActivationCode>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM activation_codes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count codes", e))?;

        let codes = sqlx::query_as::<_, ActivationCode>(
            "SELECT * FROM activation_codes ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list codes", e))?;

        Ok(PageResponse::new(
            codes,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Atomically consume an unused code.
    ///
    /// The conditional UPDATE makes the used flag transition false→true
    /// exactly once; the loser of a concurrent race gets `None`.
    pub async fn consume(&self, code: &str) -> AppResult<Option<ActivationCode>> {
        sqlx::query_as::<_, ActivationCode>(
            "UPDATE activation_codes SET used = TRUE, used_at = NOW() \
             WHERE code = $1 AND used = FALSE RETURNING *",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to consume code", e))
    }

    /// Record which user consumed a code.
    pub async fn mark_used_by(&self, id: Uuid, user_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE activation_codes SET used_by = $2 WHERE id = $1")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark code used", e))?;
        Ok(())
    }

    /// Release a consumed code back to the unused pool.
    ///
    /// Only used when user creation fails after the code was consumed.
    pub async fn release(&self, id: Uuid) -> AppResult<()> {
        sqlx::query(
            "UPDATE activation_codes SET used = FALSE, used_by = NULL, used_at = NULL \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to release code", e))?;
        Ok(())
    }

    /// Delete a code by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM activation_codes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete code", e))?;

        Ok(result.rows_affected() > 0)
    }
}
