//! Training exercise management operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mondio_auth::access::can_mutate;
use mondio_core::error::AppError;
use mondio_core::result::AppResult;
use mondio_database::repositories::TrainingRepository;
use mondio_entity::training::{CreateTraining, Training, UpdateTraining};

use crate::context::RequestContext;

/// Handles training exercise CRUD with ownership enforcement.
#[derive(Debug, Clone)]
pub struct TrainingService {
    /// Training repository.
    training_repo: Arc<TrainingRepository>,
}

impl TrainingService {
    /// Creates a new training service.
    pub fn new(training_repo: Arc<TrainingRepository>) -> Self {
        Self { training_repo }
    }

    /// List the caller's trainings.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Training>> {
        self.training_repo.find_by_owner(ctx.user_id).await
    }

    /// Fetch one training owned by the caller.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Training> {
        let training = self
            .training_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Training {id} not found")))?;

        if training.user_id != ctx.user_id {
            return Err(AppError::not_found(format!("Training {id} not found")));
        }
        Ok(training)
    }

    /// Create a training owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, name: &str) -> AppResult<Training> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Training name cannot be empty"));
        }

        let training = self
            .training_repo
            .create(&CreateTraining {
                user_id: ctx.user_id,
                name: name.to_string(),
            })
            .await?;

        info!(user_id = %ctx.user_id, training_id = %training.id, "Training created");
        Ok(training)
    }

    /// Update a training. Owner only.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateTraining,
    ) -> AppResult<Training> {
        let training = self.get(ctx, id).await?;

        if !can_mutate(Some(ctx.actor()), Some(&training)) {
            return Err(AppError::forbidden("Only the owner can edit this training"));
        }

        self.training_repo.update(id, &data).await
    }

    /// Delete a training. Rejected while any session entry references it.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let training = self.get(ctx, id).await?;

        if !can_mutate(Some(ctx.actor()), Some(&training)) {
            return Err(AppError::forbidden(
                "Only the owner can delete this training",
            ));
        }

        let references = self.training_repo.count_references(id).await?;
        if references > 0 {
            return Err(AppError::conflict(
                "Training is used in sessions and cannot be deleted",
            ));
        }

        self.training_repo.delete(id).await?;
        info!(user_id = %ctx.user_id, training_id = %id, "Training deleted");
        Ok(())
    }
}
