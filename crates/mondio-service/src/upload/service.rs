//! Media upload operations.
//!
//! Every upload is gated by the same ownership predicate as edits and
//! deletes: only the resource owner may attach media to it.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use mondio_auth::access::can_mutate;
use mondio_core::config::storage::StorageConfig;
use mondio_core::error::AppError;
use mondio_core::result::AppResult;
use mondio_core::traits::media::{ByteStream, MediaStore};
use mondio_database::repositories::{
    DogRepository, SessionRepository, TrainingRepository, UserRepository,
};
use mondio_entity::dog::Dog;
use mondio_entity::session::{Session, SessionEntry};
use mondio_entity::training::Training;
use mondio_entity::user::User;

use crate::context::RequestContext;

/// The kind of media being uploaded, with its content-type allowlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Still image uploads (profile and dog photos).
    Photo,
    /// Video uploads (trainings, sessions, entries).
    Video,
}

impl MediaKind {
    /// Map an incoming content type onto a file extension, or reject it.
    pub fn extension_for(&self, content_type: &str) -> Option<&'static str> {
        match self {
            Self::Photo => match content_type {
                "image/jpeg" => Some("jpg"),
                "image/png" => Some("png"),
                "image/webp" => Some("webp"),
                _ => None,
            },
            Self::Video => match content_type {
                "video/mp4" => Some("mp4"),
                "video/quicktime" => Some("mov"),
                "video/webm" => Some("webm"),
                _ => None,
            },
        }
    }
}

/// Handles uploads for user photos, dog photos, and videos.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Media store backend.
    store: Arc<dyn MediaStore>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Dog repository.
    dog_repo: Arc<DogRepository>,
    /// Training repository.
    training_repo: Arc<TrainingRepository>,
    /// Session repository.
    session_repo: Arc<SessionRepository>,
    /// Storage limits.
    config: StorageConfig,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        store: Arc<dyn MediaStore>,
        user_repo: Arc<UserRepository>,
        dog_repo: Arc<DogRepository>,
        training_repo: Arc<TrainingRepository>,
        session_repo: Arc<SessionRepository>,
        config: StorageConfig,
    ) -> Self {
        Self {
            store,
            user_repo,
            dog_repo,
            training_repo,
            session_repo,
            config,
        }
    }

    /// Upload the caller's profile photo.
    pub async fn user_photo(
        &self,
        ctx: &RequestContext,
        content_type: &str,
        data: Bytes,
    ) -> AppResult<User> {
        let path = self
            .write_media(MediaKind::Photo, "users", ctx.user_id, content_type, data)
            .await?;
        self.user_repo.update_photo(ctx.user_id, &path).await
    }

    /// Upload a dog's photo. Owner only.
    pub async fn dog_photo(
        &self,
        ctx: &RequestContext,
        dog_id: Uuid,
        content_type: &str,
        data: Bytes,
    ) -> AppResult<Dog> {
        let dog = self
            .dog_repo
            .find_by_id(dog_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Dog {dog_id} not found")))?;

        if !can_mutate(Some(ctx.actor()), Some(&dog)) {
            return Err(AppError::forbidden(
                "Only the owner can upload a photo for this dog",
            ));
        }

        let path = self
            .write_media(MediaKind::Photo, "dogs", dog_id, content_type, data)
            .await?;
        self.dog_repo.update_photo(dog_id, &path).await
    }

    /// Upload a training's demonstration video. Owner only.
    pub async fn training_video(
        &self,
        ctx: &RequestContext,
        training_id: Uuid,
        content_type: &str,
        data: Bytes,
    ) -> AppResult<Training> {
        let training = self
            .training_repo
            .find_by_id(training_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Training {training_id} not found")))?;

        if !can_mutate(Some(ctx.actor()), Some(&training)) {
            return Err(AppError::forbidden(
                "Only the owner can upload a video for this training",
            ));
        }

        let path = self
            .write_media(MediaKind::Video, "trainings", training_id, content_type, data)
            .await?;
        self.training_repo.update_video(training_id, &path).await
    }

    /// Upload a session video. Owner only.
    pub async fn session_video(
        &self,
        ctx: &RequestContext,
        session_id: Uuid,
        content_type: &str,
        data: Bytes,
    ) -> AppResult<Session> {
        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Session {session_id} not found")))?;

        if !can_mutate(Some(ctx.actor()), Some(&session)) {
            return Err(AppError::forbidden(
                "Only the owner can upload a video for this session",
            ));
        }

        let path = self
            .write_media(MediaKind::Video, "sessions", session_id, content_type, data)
            .await?;
        self.session_repo.update_video(session_id, &path).await
    }

    /// Upload an entry video. Session owner only.
    pub async fn entry_video(
        &self,
        ctx: &RequestContext,
        entry_id: Uuid,
        content_type: &str,
        data: Bytes,
    ) -> AppResult<SessionEntry> {
        let entry = self
            .session_repo
            .find_entry(entry_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Entry {entry_id} not found")))?;

        let session = self
            .session_repo
            .find_by_id(entry.session_id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))?;

        if !can_mutate(Some(ctx.actor()), Some(&session)) {
            return Err(AppError::forbidden(
                "Only the owner can upload a video for this entry",
            ));
        }

        let path = self
            .write_media(MediaKind::Video, "entries", entry_id, content_type, data)
            .await?;
        self.session_repo.update_entry_video(entry_id, &path).await
    }

    /// Open a stored media object for streaming to the client.
    pub async fn open(&self, path: &str) -> AppResult<ByteStream> {
        self.store.read(path).await
    }

    async fn write_media(
        &self,
        kind: MediaKind,
        category: &str,
        owner_id: Uuid,
        content_type: &str,
        data: Bytes,
    ) -> AppResult<String> {
        let extension = kind.extension_for(content_type).ok_or_else(|| {
            AppError::validation(format!("Unsupported content type: {content_type}"))
        })?;

        let max_bytes = match kind {
            MediaKind::Photo => self.config.max_photo_size_bytes,
            MediaKind::Video => self.config.max_video_size_bytes,
        };
        if data.len() as u64 > max_bytes {
            return Err(AppError::validation(format!(
                "Upload exceeds the {max_bytes} byte limit"
            )));
        }
        if data.is_empty() {
            return Err(AppError::validation("Upload is empty"));
        }

        let path = format!("{category}/{owner_id}/{}.{extension}", Uuid::new_v4());
        self.store.write(&path, data).await?;

        info!(path, "Media stored");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_allowlist() {
        assert_eq!(MediaKind::Photo.extension_for("image/jpeg"), Some("jpg"));
        assert_eq!(MediaKind::Photo.extension_for("image/png"), Some("png"));
        assert_eq!(MediaKind::Photo.extension_for("image/webp"), Some("webp"));
        assert_eq!(MediaKind::Photo.extension_for("image/gif"), None);
        assert_eq!(MediaKind::Photo.extension_for("video/mp4"), None);
    }

    #[test]
    fn test_video_allowlist() {
        assert_eq!(MediaKind::Video.extension_for("video/mp4"), Some("mp4"));
        assert_eq!(MediaKind::Video.extension_for("video/quicktime"), Some("mov"));
        assert_eq!(MediaKind::Video.extension_for("video/webm"), Some("webm"));
        assert_eq!(MediaKind::Video.extension_for("image/jpeg"), None);
        assert_eq!(MediaKind::Video.extension_for("application/pdf"), None);
    }
}
