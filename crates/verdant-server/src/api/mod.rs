// ABOUTME: API module containing the HTTP handler functions for the verdant REST API.
// ABOUTME: Organized into sub-modules for tool listing, tool execution, and orchestration.

pub mod execute;
pub mod orchestrate;
pub mod tools;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Build a `{"error": message}` response with the given status.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(serde_json::json!({ "error": message.into() })),
    )
        .into_response()
}
