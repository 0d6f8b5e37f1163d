//! Entry handlers for the persisted service

use crate::error::ApiError;
use crate::AppState;
use axum_extra::extract::WithRejection;
use axum::{
    extract::{Path, State},
    Json,
};
use journal_types::{Entry, EntryPayload, MessageResponse};
use tracing::{debug, info};

pub async fn create(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<EntryPayload>, ApiError>,
) -> Result<Json<Entry>, ApiError> {
    let entry = state.entries.create_entry(&payload).await?;
    info!("Created entry {}", entry.id);
    Ok(Json(entry))
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Entry>>, ApiError> {
    Ok(Json(state.entries.list_entries().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Entry>, ApiError> {
    debug!("Fetching entry {}", id);
    Ok(Json(state.entries.get_entry(id).await?))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    WithRejection(Json(payload), _): WithRejection<Json<EntryPayload>, ApiError>,
) -> Result<Json<Entry>, ApiError> {
    let entry = state.entries.update_entry(id, &payload).await?;
    info!("Updated entry {}", id);
    Ok(Json(entry))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.entries.delete_entry(id).await?;
    info!("Deleted entry {}", id);
    Ok(Json(MessageResponse::new("Entry deleted")))
}

#[cfg(test)]
mod tests {
    use crate::testing::{journal_app, send};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_entry_lifecycle() {
        let (app, _dir) = journal_app().await;

        let (status, created) = send(
            &app,
            Method::POST,
            "/entries/",
            Some(json!({"title": "Trip", "content": "Day one", "summary": "travel"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["summary"], "travel");
        assert!(created["date"].is_string());

        let (status, fetched) = send(&app, Method::GET, &format!("/entries/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched, created);

        let (status, updated) = send(
            &app,
            Method::PUT,
            &format!("/entries/{}", id),
            Some(json!({"title": "Trip", "content": "Day two", "date": "2001-01-01T00:00:00Z"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["content"], "Day two");
        assert_eq!(updated["summary"], serde_json::Value::Null);
        assert_eq!(updated["date"], created["date"]);

        let (_, listed) = send(&app, Method::GET, "/entries/", None).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let (status, body) = send(&app, Method::DELETE, &format!("/entries/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Entry deleted"}));

        let (status, body) = send(&app, Method::DELETE, &format!("/entries/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Entry not found"}));
    }

    #[tokio::test]
    async fn test_missing_entry_is_404() {
        let (app, _dir) = journal_app().await;

        let (status, body) = send(&app, Method::GET, "/entries/77", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "Entry not found");

        let (status, _) = send(
            &app,
            Method::PUT,
            "/entries/77",
            Some(json!({"title": "t", "content": "c"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, listed) = send(&app, Method::GET, "/entries/", None).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_client_supplied_id() {
        let (app, _dir) = journal_app().await;
        let body = json!({"id": 10, "title": "t", "content": "c"});

        let (status, created) = send(&app, Method::POST, "/entries/", Some(body.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["id"], 10);

        let (status, _) = send(&app, Method::POST, "/entries/", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_content_is_reported_as_detail() {
        let (app, _dir) = journal_app().await;

        let (status, body) =
            send(&app, Method::POST, "/entries/", Some(json!({"title": "t"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["detail"].as_str().unwrap().contains("content"));
    }
}
