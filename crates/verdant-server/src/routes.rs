// ABOUTME: Route definitions for the verdant HTTP API.
// ABOUTME: Assembles all API routes into a single Axum Router with shared state and HTTP middleware.

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools", get(api::tools::list_tools))
        .route("/execute/{tool_name}", post(api::execute::execute_tool))
        .route("/orchestrate", post(api::orchestrate::orchestrate))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
