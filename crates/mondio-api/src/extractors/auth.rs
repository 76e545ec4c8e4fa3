//! `AuthUser` extractor — pulls the JWT from the Authorization header,
//! validates it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use mondio_core::error::AppError;
use mondio_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError(AppError::unauthorized("Missing Authorization header")))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError(AppError::unauthorized("Invalid Authorization header format"))
        })?;

        // Decode and validate JWT
        let claims = state.jwt_decoder.decode_token(token).map_err(ApiError)?;

        let ctx = RequestContext::new(claims.user_id(), claims.email, claims.is_trainer);
        Ok(AuthUser(ctx))
    }
}
