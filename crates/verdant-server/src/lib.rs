// ABOUTME: HTTP server for verdant, exposing the tool catalog, single-tool execution, and workflows.
// ABOUTME: Uses Axum with an explicitly constructed agent registry shared through AppState.

pub mod api;
pub mod app_state;
pub mod config;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, VerdantConfig};
pub use routes::create_router;
