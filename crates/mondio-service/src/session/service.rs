//! Training session management operations.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use mondio_auth::access::{can_add_trainer_note, can_mutate};
use mondio_core::error::AppError;
use mondio_core::result::AppResult;
use mondio_database::repositories::{DogRepository, SessionRepository};
use mondio_entity::dog::DogLevel;
use mondio_entity::session::{
    CreateSession, CreateSessionEntry, Session, SessionEntry, SessionWithEntries, UpdateSession,
};

use crate::context::RequestContext;

/// Data accepted from the API layer for session creation.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewSession {
    /// Target dog.
    pub dog_id: Uuid,
    /// Calendar date.
    pub date: NaiveDate,
    /// Level trained at.
    pub level: DogLevel,
    /// Session notes.
    pub notes: Option<String>,
    /// Entries to create alongside the session.
    pub entries: Vec<CreateSessionEntry>,
}

/// Handles session and entry CRUD, plus trainer notes.
#[derive(Debug, Clone)]
pub struct SessionService {
    /// Session repository.
    session_repo: Arc<SessionRepository>,
    /// Dog repository, for visibility checks at creation.
    dog_repo: Arc<DogRepository>,
}

impl SessionService {
    /// Creates a new session service.
    pub fn new(session_repo: Arc<SessionRepository>, dog_repo: Arc<DogRepository>) -> Self {
        Self {
            session_repo,
            dog_repo,
        }
    }

    /// List sessions visible to the caller with entries embedded,
    /// newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<SessionWithEntries>> {
        let sessions = self.session_repo.find_visible_to(ctx.user_id).await?;
        self.session_repo.with_entries(sessions).await
    }

    /// Create a session owned by the caller against a visible dog.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: NewSession,
    ) -> AppResult<SessionWithEntries> {
        self.validate_entries(&data.entries)?;

        let dog = self
            .dog_repo
            .find_by_id(data.dog_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Dog {} not found", data.dog_id)))?;

        let visible = dog.user_id == ctx.user_id
            || (ctx.is_trainer && dog.trainer_id == Some(ctx.user_id));
        if !visible {
            return Err(AppError::not_found(format!("Dog {} not found", data.dog_id)));
        }

        let created = self
            .session_repo
            .create(&CreateSession {
                user_id: ctx.user_id,
                dog_id: data.dog_id,
                date: data.date,
                level: data.level,
                notes: data.notes,
                entries: data.entries,
            })
            .await?;

        info!(user_id = %ctx.user_id, session_id = %created.session.id, "Session created");
        Ok(created)
    }

    /// Update a session. Owner only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateSession,
    ) -> AppResult<SessionWithEntries> {
        if let Some(entries) = &data.entries {
            self.validate_entries(entries)?;
        }

        let session = self.get_visible(ctx, id).await?;
        if !can_mutate(Some(ctx.actor()), Some(&session)) {
            return Err(AppError::forbidden("Only the owner can edit this session"));
        }

        self.session_repo.update(id, &data).await
    }

    /// Delete a session. Owner only; entries cascade.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let session = self.get_visible(ctx, id).await?;
        if !can_mutate(Some(ctx.actor()), Some(&session)) {
            return Err(AppError::forbidden("Only the owner can delete this session"));
        }

        self.session_repo.delete(id).await?;
        info!(user_id = %ctx.user_id, session_id = %id, "Session deleted");
        Ok(())
    }

    /// Delete one entry of a session. Session owner only.
    pub async fn delete_entry(
        &self,
        ctx: &RequestContext,
        session_id: Uuid,
        entry_id: Uuid,
    ) -> AppResult<()> {
        let session = self.get_visible(ctx, session_id).await?;
        if !can_mutate(Some(ctx.actor()), Some(&session)) {
            return Err(AppError::forbidden("Only the owner can edit this session"));
        }

        let entry = self.get_entry_of(session_id, entry_id).await?;
        self.session_repo.delete_entry(entry.id).await?;
        Ok(())
    }

    /// Append a one-time trainer note to an entry.
    ///
    /// Requires the trainer role, visibility of the session, and an entry
    /// without a note. The conditional UPDATE in the repository makes the
    /// write first-wins under concurrency.
    pub async fn add_trainer_note(
        &self,
        ctx: &RequestContext,
        session_id: Uuid,
        entry_id: Uuid,
        note: &str,
    ) -> AppResult<SessionEntry> {
        let note = note.trim();
        if note.is_empty() {
            return Err(AppError::validation("Trainer note cannot be empty"));
        }

        // Visibility gate: the session must be the trainer's own or belong
        // to a dog assigned to them.
        let _session = self.get_visible(ctx, session_id).await?;

        let entry = self.get_entry_of(session_id, entry_id).await?;

        if !can_add_trainer_note(Some(ctx.actor()), Some(&entry)) {
            return if entry.trainer_note.is_some() {
                Err(AppError::conflict("Entry already has a trainer note"))
            } else {
                Err(AppError::forbidden("Only trainers can add trainer notes"))
            };
        }

        let updated = self
            .session_repo
            .set_trainer_note(entry_id, note)
            .await?
            .ok_or_else(|| AppError::conflict("Entry already has a trainer note"))?;

        info!(user_id = %ctx.user_id, entry_id = %entry_id, "Trainer note added");
        Ok(updated)
    }

    /// Fetch a session the caller can see, or not-found.
    pub async fn get_visible(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Session> {
        let session = self
            .session_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Session {id} not found")))?;

        if session.user_id == ctx.user_id {
            return Ok(session);
        }

        if ctx.is_trainer {
            let dog = self.dog_repo.find_by_id(session.dog_id).await?;
            if dog.map(|d| d.trainer_id == Some(ctx.user_id)).unwrap_or(false) {
                return Ok(session);
            }
        }

        Err(AppError::not_found(format!("Session {id} not found")))
    }

    async fn get_entry_of(&self, session_id: Uuid, entry_id: Uuid) -> AppResult<SessionEntry> {
        let entry = self
            .session_repo
            .find_entry(entry_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Entry {entry_id} not found")))?;

        if entry.session_id != session_id {
            return Err(AppError::not_found(format!("Entry {entry_id} not found")));
        }
        Ok(entry)
    }

    fn validate_entries(&self, entries: &[CreateSessionEntry]) -> AppResult<()> {
        for entry in entries {
            if !(0..=10).contains(&entry.score) {
                return Err(AppError::validation("Score must be between 0 and 10"));
            }
        }
        Ok(())
    }
}
