//! Activation code management operations.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use mondio_core::error::AppError;
use mondio_core::result::AppResult;
use mondio_core::types::pagination::{PageRequest, PageResponse};
use mondio_database::repositories::ActivationCodeRepository;
use mondio_entity::activation::ActivationCode;

use crate::context::RequestContext;

use super::generator::{CodeGenerator, CodeStore};

#[async_trait]
impl CodeStore for ActivationCodeRepository {
    async fn insert_code(&self, code: &str) -> AppResult<ActivationCode> {
        self.insert(code).await
    }
}

/// Handles activation code administration: generate, list, revoke.
///
/// All operations are trainer-gated; plain users never see codes.
#[derive(Debug, Clone)]
pub struct ActivationCodeService {
    /// Code repository.
    code_repo: Arc<ActivationCodeRepository>,
    /// Code generator.
    generator: CodeGenerator,
}

impl ActivationCodeService {
    /// Creates a new activation code service.
    pub fn new(code_repo: Arc<ActivationCodeRepository>) -> Self {
        Self {
            code_repo,
            generator: CodeGenerator::new(),
        }
    }

    /// Generate and persist one unique code.
    pub async fn generate(&self, ctx: &RequestContext) -> AppResult<ActivationCode> {
        self.require_trainer(ctx)?;

        let code = self
            .generator
            .generate_unique(self.code_repo.as_ref())
            .await?;

        info!(user_id = %ctx.user_id, code_id = %code.id, "Activation code generated");
        Ok(code)
    }

    /// List codes with pagination, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<ActivationCode>> {
        self.require_trainer(ctx)?;
        self.code_repo.find_page(page).await
    }

    /// Revoke (delete) an unused code.
    pub async fn revoke(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        self.require_trainer(ctx)?;

        let code = self
            .code_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Code {id} not found")))?;

        if code.used {
            return Err(AppError::conflict("A used code cannot be revoked"));
        }

        self.code_repo.delete(id).await?;
        info!(user_id = %ctx.user_id, code_id = %id, "Activation code revoked");
        Ok(())
    }

    fn require_trainer(&self, ctx: &RequestContext) -> AppResult<()> {
        if ctx.is_trainer {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Activation codes are managed by trainers only",
            ))
        }
    }
}
