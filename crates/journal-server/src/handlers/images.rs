//! Image attachment handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{Multipart, Path, State},
    response::{IntoResponse, Response},
    Json,
};
use journal_core::JournalError;
use journal_types::{ErrorResponse, ImageRecord, ImageUploaded, MessageResponse};
use tracing::warn;

/// Takes the first multipart field that carries a filename.
pub async fn upload(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
    mut multipart: Multipart,
) -> Result<Json<ImageUploaded>, ApiError> {
    while let Some(field) = multipart.next_field().await? {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await?;

        let record = state.image_service.upload(entry_id, &filename, data).await?;
        let path = state.image_service.path_of(&record);

        return Ok(Json(ImageUploaded {
            message: "Image uploaded".to_string(),
            filename: record.filename,
            path: path.display().to_string(),
        }));
    }

    Err(JournalError::MissingField("file").into())
}

pub async fn list(
    State(state): State<AppState>,
    Path(entry_id): Path<i64>,
) -> Result<Json<Vec<ImageRecord>>, ApiError> {
    Ok(Json(state.image_service.list(entry_id).await?))
}

/// A missing image is acknowledged in the body, not as an HTTP error.
pub async fn delete(
    State(state): State<AppState>,
    Path((entry_id, filename)): Path<(i64, String)>,
) -> Result<Response, ApiError> {
    if state.image_service.delete(entry_id, &filename).await? {
        Ok(Json(MessageResponse::new("Image deleted")).into_response())
    } else {
        warn!("Image {} for entry {} not found", filename, entry_id);
        Ok(Json(ErrorResponse::new("Image not found")).into_response())
    }
}
