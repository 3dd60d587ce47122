//! HTTP request handlers.

pub mod categories;
pub mod envelope;
pub mod products;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// 200 `{}` -- the success shape of every write endpoint.
pub(crate) fn empty_object() -> Response {
    Json(json!({})).into_response()
}

/// 404 with an empty object body.
pub(crate) fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({}))).into_response()
}
