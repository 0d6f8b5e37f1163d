//! Registration, login and password reset handlers

use crate::error::ApiError;
use crate::AppState;
use axum_extra::extract::WithRejection;
use axum::{
    extract::{Query, State},
    Json,
};
use bytes::Bytes;
use journal_core::JournalError;
use journal_types::{MessageResponse, PasswordReset, User, UserLogin, UserRegistration};
use tracing::info;

pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<UserRegistration>, ApiError>,
) -> Result<Json<User>, ApiError> {
    info!("Registration attempt for: {}", req.email);
    let user = state.auth_service.register(&req.email, &req.password).await?;
    Ok(Json(user))
}

pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<UserLogin>, ApiError>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("Login attempt for: {}", req.email);
    state.auth_service.login(&req.email, &req.password).await?;
    info!("Login successful for: {}", req.email);
    Ok(Json(MessageResponse::new("Login successful")))
}

/// The email may arrive as `?email=` or as a JSON body `{"email": ...}`.
pub async fn reset_password(
    State(state): State<AppState>,
    Query(query): Query<PasswordReset>,
    body: Bytes,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = match query.email {
        Some(email) => email,
        None => serde_json::from_slice::<PasswordReset>(&body)
            .ok()
            .and_then(|b| b.email)
            .ok_or(JournalError::MissingField("email"))?,
    };

    state.auth_service.reset_password(&email).await?;
    Ok(Json(MessageResponse::new("Password reset link sent")))
}
