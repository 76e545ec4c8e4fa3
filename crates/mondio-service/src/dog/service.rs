//! Dog management operations.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use mondio_auth::access::can_mutate;
use mondio_core::error::AppError;
use mondio_core::result::AppResult;
use mondio_database::repositories::DogRepository;
use mondio_entity::dog::{CreateDog, Dog, DogLevel, UpdateDog};

use crate::context::RequestContext;

/// Data accepted from the API layer for dog creation.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewDog {
    /// Call name.
    pub name: String,
    /// Breed.
    pub breed: Option<String>,
    /// Age in years.
    pub age: Option<i32>,
    /// Competition level.
    pub level: DogLevel,
}

/// Handles dog CRUD with ownership enforcement.
#[derive(Debug, Clone)]
pub struct DogService {
    /// Dog repository.
    dog_repo: Arc<DogRepository>,
}

impl DogService {
    /// Creates a new dog service.
    pub fn new(dog_repo: Arc<DogRepository>) -> Self {
        Self { dog_repo }
    }

    /// List dogs visible to the caller: own dogs plus assigned client dogs.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Dog>> {
        self.dog_repo.find_visible_to(ctx.user_id).await
    }

    /// Fetch one dog, requiring visibility.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<Dog> {
        let dog = self
            .dog_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Dog {id} not found")))?;

        let visible = dog.user_id == ctx.user_id
            || (ctx.is_trainer && dog.trainer_id == Some(ctx.user_id));
        if !visible {
            return Err(AppError::not_found(format!("Dog {id} not found")));
        }
        Ok(dog)
    }

    /// Create a dog owned by the caller.
    pub async fn create(&self, ctx: &RequestContext, data: NewDog) -> AppResult<Dog> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Dog name cannot be empty"));
        }

        let dog = self
            .dog_repo
            .create(&CreateDog {
                user_id: ctx.user_id,
                name: data.name.trim().to_string(),
                breed: data.breed,
                age: data.age,
                level: data.level,
            })
            .await?;

        info!(user_id = %ctx.user_id, dog_id = %dog.id, "Dog created");
        Ok(dog)
    }

    /// Update a dog. Owner only — trainer assignment grants no edit rights.
    pub async fn update(&self, ctx: &RequestContext, id: Uuid, data: UpdateDog) -> AppResult<Dog> {
        let dog = self.get(ctx, id).await?;

        if !can_mutate(Some(ctx.actor()), Some(&dog)) {
            return Err(AppError::forbidden("Only the owner can edit this dog"));
        }

        self.dog_repo.update(id, &data).await
    }

    /// Delete a dog. Owner only; sessions logged against it cascade.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let dog = self.get(ctx, id).await?;

        if !can_mutate(Some(ctx.actor()), Some(&dog)) {
            return Err(AppError::forbidden("Only the owner can delete this dog"));
        }

        self.dog_repo.delete(id).await?;
        info!(user_id = %ctx.user_id, dog_id = %id, "Dog deleted");
        Ok(())
    }
}
