//! Session and session entry repository implementation.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use mondio_core::error::{AppError, ErrorKind};
use mondio_core::result::AppResult;
use mondio_entity::session::{
    CreateSession, CreateSessionEntry, Session, SessionEntry, SessionWithEntries, UpdateSession,
};

/// Repository for sessions and their scored entries.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a session by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find session by id", e)
            })
    }

    /// List sessions visible to a user, newest first: own sessions plus
    /// sessions of dogs the user is assigned to as trainer.
    pub async fn find_visible_to(&self, user_id: Uuid) -> AppResult<Vec<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT s.* FROM sessions s \
             JOIN dogs d ON d.id = s.dog_id \
             WHERE s.user_id = $1 OR d.trainer_id = $1 \
             ORDER BY s.date DESC, s.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list sessions", e))
    }

    /// Load the entries for a set of sessions and zip them together.
    pub async fn with_entries(&self, sessions: Vec<Session>) -> AppResult<Vec<SessionWithEntries>> {
        let ids: Vec<Uuid> = sessions.iter().map(|s| s.id).collect();
        let entries = sqlx::query_as::<_, SessionEntry>(
            "SELECT * FROM session_entries WHERE session_id = ANY($1) ORDER BY created_at ASC",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load entries", e))?;

        Ok(sessions
            .into_iter()
            .map(|session| {
                let entries = entries
                    .iter()
                    .filter(|e| e.session_id == session.id)
                    .cloned()
                    .collect();
                SessionWithEntries { session, entries }
            })
            .collect())
    }

    /// List the entries of one session, oldest first.
    pub async fn find_entries(&self, session_id: Uuid) -> AppResult<Vec<SessionEntry>> {
        sqlx::query_as::<_, SessionEntry>(
            "SELECT * FROM session_entries WHERE session_id = $1 ORDER BY created_at ASC",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list entries", e))
    }

    /// Find a single entry by primary key.
    pub async fn find_entry(&self, entry_id: Uuid) -> AppResult<Option<SessionEntry>> {
        sqlx::query_as::<_, SessionEntry>("SELECT * FROM session_entries WHERE id = $1")
            .bind(entry_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find entry", e))
    }

    /// Create a session together with its entries in one transaction.
    pub async fn create(&self, data: &CreateSession) -> AppResult<SessionWithEntries> {
        let mut tx = self.begin().await?;

        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (user_id, dog_id, date, level, notes) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.dog_id)
        .bind(data.date)
        .bind(data.level)
        .bind(&data.notes)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))?;

        let entries = insert_entries(&mut tx, session.id, &data.entries).await?;

        self.commit(tx).await?;
        Ok(SessionWithEntries { session, entries })
    }

    /// Update a session; when replacement entries are given, the existing
    /// entries are deleted and re-inserted in the same transaction.
    pub async fn update(&self, id: Uuid, data: &UpdateSession) -> AppResult<SessionWithEntries> {
        let mut tx = self.begin().await?;

        let session = sqlx::query_as::<_, Session>(
            "UPDATE sessions SET dog_id = COALESCE($2, dog_id), \
                                 date = COALESCE($3, date), \
                                 level = COALESCE($4, level), \
                                 notes = COALESCE($5, notes), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(data.dog_id)
        .bind(data.date)
        .bind(data.level)
        .bind(&data.notes)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update session", e))?
        .ok_or_else(|| AppError::not_found(format!("Session {id} not found")))?;

        let entries = match &data.entries {
            Some(replacement) => {
                sqlx::query("DELETE FROM session_entries WHERE session_id = $1")
                    .bind(id)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to clear entries", e)
                    })?;
                insert_entries(&mut tx, id, replacement).await?
            }
            None => Vec::new(),
        };

        self.commit(tx).await?;

        let entries = if data.entries.is_some() {
            entries
        } else {
            self.find_entries(id).await?
        };

        Ok(SessionWithEntries { session, entries })
    }

    /// Update a session's video path.
    pub async fn update_video(&self, id: Uuid, video_url: &str) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "UPDATE sessions SET video_url = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(video_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update session video", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Session {id} not found")))
    }

    /// Update an entry's video path.
    pub async fn update_entry_video(
        &self,
        entry_id: Uuid,
        video_url: &str,
    ) -> AppResult<SessionEntry> {
        sqlx::query_as::<_, SessionEntry>(
            "UPDATE session_entries SET video_url = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(entry_id)
        .bind(video_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update entry video", e))?
        .ok_or_else(|| AppError::not_found(format!("Entry {entry_id} not found")))
    }

    /// Set a trainer note on an entry, first-wins.
    ///
    /// The conditional UPDATE only fires while `trainer_note` is NULL, so a
    /// note can never be overwritten through this path. Returns `None` when
    /// a note was already present.
    pub async fn set_trainer_note(
        &self,
        entry_id: Uuid,
        note: &str,
    ) -> AppResult<Option<SessionEntry>> {
        sqlx::query_as::<_, SessionEntry>(
            "UPDATE session_entries SET trainer_note = $2, updated_at = NOW() \
             WHERE id = $1 AND trainer_note IS NULL RETURNING *",
        )
        .bind(entry_id)
        .bind(note)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set trainer note", e))
    }

    /// Delete a single entry.
    pub async fn delete_entry(&self, entry_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM session_entries WHERE id = $1")
            .bind(entry_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete entry", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a session by ID. Entries cascade.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete session", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })
    }

    async fn commit(&self, tx: Transaction<'static, Postgres>) -> AppResult<()> {
        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })
    }
}

/// Insert entries for a session within an open transaction.
async fn insert_entries(
    tx: &mut Transaction<'static, Postgres>,
    session_id: Uuid,
    entries: &[CreateSessionEntry],
) -> AppResult<Vec<SessionEntry>> {
    let mut created = Vec::with_capacity(entries.len());
    for entry in entries {
        let row = sqlx::query_as::<_, SessionEntry>(
            "INSERT INTO session_entries (session_id, training_id, score, notes) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(session_id)
        .bind(entry.training_id)
        .bind(entry.score)
        .bind(&entry.notes)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert entry", e))?;
        created.push(row);
    }
    Ok(created)
}
