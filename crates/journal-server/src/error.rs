//! HTTP error mapping for the persisted service

use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use journal_core::JournalError;
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    Journal(JournalError),
    Multipart(MultipartError),
    Body(JsonRejection),
}

impl From<JournalError> for ApiError {
    fn from(e: JournalError) -> Self {
        ApiError::Journal(e)
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::Multipart(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        ApiError::Body(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Journal(e) => match e {
                JournalError::EntryNotFound(_) | JournalError::UserNotFound(_) => {
                    StatusCode::NOT_FOUND
                }
                JournalError::EntryExists(_)
                | JournalError::EmailTaken(_)
                | JournalError::InvalidFilename(_) => StatusCode::BAD_REQUEST,
                JournalError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                JournalError::InvalidEmail(_) | JournalError::MissingField(_) => {
                    StatusCode::UNPROCESSABLE_ENTITY
                }
                JournalError::PasswordHash(_)
                | JournalError::Database(_)
                | JournalError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Multipart(e) => e.status(),
            ApiError::Body(e) => e.status(),
        }
    }

    /// Message placed in the `detail` field of the response body
    pub fn detail(&self) -> String {
        match self {
            ApiError::Journal(e) => match e {
                JournalError::EntryNotFound(_) => "Entry not found".to_string(),
                JournalError::EntryExists(_) => "Entry already exists".to_string(),
                JournalError::UserNotFound(_) => "User not found".to_string(),
                JournalError::EmailTaken(_) => "Email already registered".to_string(),
                JournalError::InvalidCredentials => "Invalid email or password".to_string(),
                JournalError::InvalidEmail(_) => "Invalid email address".to_string(),
                JournalError::InvalidFilename(name) => format!("Invalid filename: {:?}", name),
                JournalError::MissingField(field) => format!("Missing field: {}", field),
                _ => "Internal server error".to_string(),
            },
            ApiError::Multipart(e) => e.body_text(),
            ApiError::Body(e) => e.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            match &self {
                ApiError::Journal(e) => error!(error = %e, "request failed"),
                ApiError::Multipart(e) => error!(error = %e, "multipart read failed"),
                ApiError::Body(e) => error!(error = %e, "request body read failed"),
            }
        }
        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}
