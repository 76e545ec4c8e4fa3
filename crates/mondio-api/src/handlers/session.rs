//! Session CRUD, entry, and trainer note handlers.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use mondio_core::error::AppError;
use mondio_entity::session::{CreateSessionEntry, SessionEntry, SessionWithEntries, UpdateSession};
use mondio_service::session::NewSession;

use crate::dto::request::{
    CreateSessionRequest, SessionEntryRequest, TrainerNoteRequest, UpdateSessionRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

fn map_entries(entries: Vec<SessionEntryRequest>) -> Vec<CreateSessionEntry> {
    entries
        .into_iter()
        .map(|e| CreateSessionEntry {
            training_id: e.training_id,
            score: e.score,
            notes: e.notes,
        })
        .collect()
}

/// GET /api/sessions
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<SessionWithEntries>>>, ApiError> {
    let sessions = state.session_service.list(&auth).await?;
    Ok(Json(ApiResponse::ok(sessions)))
}

/// POST /api/sessions
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSessionRequest>,
) -> Result<Json<ApiResponse<SessionWithEntries>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let session = state
        .session_service
        .create(
            &auth,
            NewSession {
                dog_id: req.dog_id,
                date: req.date,
                level: req.level,
                notes: req.notes,
                entries: map_entries(req.entries),
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(session)))
}

/// PUT /api/sessions/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSessionRequest>,
) -> Result<Json<ApiResponse<SessionWithEntries>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let session = state
        .session_service
        .update(
            &auth,
            id,
            UpdateSession {
                dog_id: req.dog_id,
                date: req.date,
                level: req.level,
                notes: req.notes,
                entries: req.entries.map(map_entries),
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(session)))
}

/// DELETE /api/sessions/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Session deleted".to_string(),
    })))
}

/// DELETE /api/sessions/{id}/entries/{entry_id}
pub async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.session_service.delete_entry(&auth, id, entry_id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Entry deleted".to_string(),
    })))
}

/// PUT /api/sessions/{id}/entries/{entry_id}/trainer-note
pub async fn add_trainer_note(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<TrainerNoteRequest>,
) -> Result<Json<ApiResponse<SessionEntry>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let entry = state
        .session_service
        .add_trainer_note(&auth, id, entry_id, &req.trainer_note)
        .await?;

    Ok(Json(ApiResponse::ok(entry)))
}
