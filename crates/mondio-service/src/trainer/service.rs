//! Trainer role and client management operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mondio_core::error::AppError;
use mondio_core::result::AppResult;
use mondio_database::repositories::{DogRepository, TrainerProfileRepository, UserRepository};
use mondio_entity::dog::Dog;
use mondio_entity::trainer::{CreateTrainerProfile, TrainerProfile, UpdateTrainerProfile};

use crate::context::RequestContext;

/// The caller's trainer status, never a 404.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TrainerStatus {
    /// Whether the trainer role has been granted.
    pub is_trainer: bool,
    /// The trainer profile, when present.
    pub trainer: Option<TrainerProfile>,
}

/// A client user with their dogs, as shown in the trainer's client list.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ClientSummary {
    /// Client user ID.
    pub id: Uuid,
    /// Client email.
    pub email: String,
    /// The client's dogs.
    pub dogs: Vec<Dog>,
}

/// Handles the trainer profile lifecycle and dog assignment.
#[derive(Debug, Clone)]
pub struct TrainerService {
    /// Trainer profile repository.
    trainer_repo: Arc<TrainerProfileRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Dog repository.
    dog_repo: Arc<DogRepository>,
}

impl TrainerService {
    /// Creates a new trainer service.
    pub fn new(
        trainer_repo: Arc<TrainerProfileRepository>,
        user_repo: Arc<UserRepository>,
        dog_repo: Arc<DogRepository>,
    ) -> Self {
        Self {
            trainer_repo,
            user_repo,
            dog_repo,
        }
    }

    /// Get the caller's trainer status.
    pub async fn get_status(&self, ctx: &RequestContext) -> AppResult<TrainerStatus> {
        let trainer = self.trainer_repo.find_by_user_id(ctx.user_id).await?;
        Ok(TrainerStatus {
            is_trainer: trainer.is_some(),
            trainer,
        })
    }

    /// Create the caller's trainer profile, granting the trainer role.
    ///
    /// The role transitions once and is never revoked.
    pub async fn create_profile(
        &self,
        ctx: &RequestContext,
        name: &str,
        bio: Option<String>,
    ) -> AppResult<TrainerProfile> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Trainer name cannot be empty"));
        }

        let profile = self
            .trainer_repo
            .create(&CreateTrainerProfile {
                user_id: ctx.user_id,
                name: name.to_string(),
                bio,
            })
            .await?;

        self.user_repo.grant_trainer(ctx.user_id).await?;

        info!(user_id = %ctx.user_id, "Trainer role granted");
        Ok(profile)
    }

    /// Update the caller's trainer profile.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        data: UpdateTrainerProfile,
    ) -> AppResult<TrainerProfile> {
        self.require_trainer(ctx)?;
        self.trainer_repo.update(ctx.user_id, &data).await
    }

    /// List all other users and their dogs, for assignment.
    pub async fn list_clients(&self, ctx: &RequestContext) -> AppResult<Vec<ClientSummary>> {
        self.require_trainer(ctx)?;

        let users = self.user_repo.find_all_except(ctx.user_id).await?;
        let mut clients = Vec::with_capacity(users.len());
        for user in users {
            let dogs = self.dog_repo.find_by_owner(user.id).await?;
            clients.push(ClientSummary {
                id: user.id,
                email: user.email,
                dogs,
            });
        }
        Ok(clients)
    }

    /// Assign the caller as a dog's trainer.
    ///
    /// Assignment grants visibility only; the owner keeps all mutation
    /// rights.
    pub async fn assign_dog(&self, ctx: &RequestContext, dog_id: Uuid) -> AppResult<Dog> {
        self.require_trainer(ctx)?;

        let dog = self
            .dog_repo
            .find_by_id(dog_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Dog {dog_id} not found")))?;

        if dog.trainer_id.is_some() && dog.trainer_id != Some(ctx.user_id) {
            return Err(AppError::conflict("Dog already has a trainer assigned"));
        }

        let dog = self.dog_repo.assign_trainer(dog_id, ctx.user_id).await?;
        info!(user_id = %ctx.user_id, dog_id = %dog_id, "Trainer assigned to dog");
        Ok(dog)
    }

    /// Remove the caller's assignment from a dog.
    pub async fn unassign_dog(&self, ctx: &RequestContext, dog_id: Uuid) -> AppResult<()> {
        self.require_trainer(ctx)?;

        let removed = self.dog_repo.unassign_trainer(dog_id, ctx.user_id).await?;
        if !removed {
            return Err(AppError::not_found(format!(
                "Dog {dog_id} is not assigned to you"
            )));
        }

        info!(user_id = %ctx.user_id, dog_id = %dog_id, "Trainer unassigned from dog");
        Ok(())
    }

    fn require_trainer(&self, ctx: &RequestContext) -> AppResult<()> {
        if ctx.is_trainer {
            Ok(())
        } else {
            Err(AppError::forbidden("Trainer role required"))
        }
    }
}
