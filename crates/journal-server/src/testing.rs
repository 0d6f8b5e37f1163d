//! Helpers for driving routers in-process from unit tests

use crate::storage::{Database, ImageDirectory};
use crate::AppState;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Persisted-service router over a fresh database and image directory.
/// Keep the `TempDir` alive for the duration of the test.
pub async fn journal_app() -> (Router, TempDir) {
    let dir = TempDir::new().unwrap();
    let db = Database::new(&dir.path().join("journal.db")).await.unwrap();
    let images = ImageDirectory::open(dir.path().join("images")).await.unwrap();

    let app = crate::journal_router(AppState::new(Arc::new(db), Arc::new(images)));
    (app, dir)
}

async fn read_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, body)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    read_json(app, req).await
}

pub async fn send_multipart(
    app: &Router,
    uri: &str,
    filename: &str,
    data: &[u8],
) -> (StatusCode, Value) {
    const BOUNDARY: &str = "journal-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            filename
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();
    read_json(app, req).await
}
