//! Media upload and serving handlers.

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use bytes::Bytes;
use uuid::Uuid;

use mondio_core::error::AppError;
use mondio_entity::dog::Dog;
use mondio_entity::session::{Session, SessionEntry};
use mondio_entity::training::Training;

use crate::dto::response::{ApiResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Pull the `file` field out of a multipart body.
async fn read_file_field(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field
            .content_type()
            .ok_or_else(|| AppError::validation("Missing content type"))?
            .to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Read error: {e}")))?;

        return Ok((content_type, data));
    }

    Err(AppError::validation("Missing 'file' field"))
}

/// POST /api/upload/user/photo
pub async fn user_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let (content_type, data) = read_file_field(multipart).await?;
    let user = state
        .upload_service
        .user_photo(&auth, &content_type, data)
        .await?;
    Ok(Json(ApiResponse::ok(UserResponse::from(&user))))
}

/// POST /api/upload/dog/{id}/photo
pub async fn dog_photo(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<Dog>>, ApiError> {
    let (content_type, data) = read_file_field(multipart).await?;
    let dog = state
        .upload_service
        .dog_photo(&auth, id, &content_type, data)
        .await?;
    Ok(Json(ApiResponse::ok(dog)))
}

/// POST /api/upload/training/{id}/video
pub async fn training_video(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<Training>>, ApiError> {
    let (content_type, data) = read_file_field(multipart).await?;
    let training = state
        .upload_service
        .training_video(&auth, id, &content_type, data)
        .await?;
    Ok(Json(ApiResponse::ok(training)))
}

/// POST /api/upload/session/{id}/video
pub async fn session_video(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<Session>>, ApiError> {
    let (content_type, data) = read_file_field(multipart).await?;
    let session = state
        .upload_service
        .session_video(&auth, id, &content_type, data)
        .await?;
    Ok(Json(ApiResponse::ok(session)))
}

/// POST /api/upload/entry/{id}/video
pub async fn entry_video(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<SessionEntry>>, ApiError> {
    let (content_type, data) = read_file_field(multipart).await?;
    let entry = state
        .upload_service
        .entry_video(&auth, id, &content_type, data)
        .await?;
    Ok(Json(ApiResponse::ok(entry)))
}

/// GET /api/uploads/{*path}
pub async fn serve_media(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(path): Path<String>,
) -> Result<Response, ApiError> {
    let stream = state.upload_service.open(&path).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type_for(&path))
        .body(Body::from_stream(stream))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// Best-effort content type from the stored file extension.
fn content_type_for(path: &str) -> &'static str {
    match path.rsplit('.').next() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("mp4") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("dogs/x/a.jpg"), "image/jpeg");
        assert_eq!(content_type_for("sessions/x/a.mp4"), "video/mp4");
        assert_eq!(content_type_for("weird"), "application/octet-stream");
    }
}
