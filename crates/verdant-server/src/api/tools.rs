// ABOUTME: Tool listing handler returning the static tool catalog.
// ABOUTME: The listing does not consult the registry, so it is identical on every call.

use axum::Json;
use verdant_core::{ToolDescriptor, tool_catalog};

/// GET /tools - List every declared tool descriptor.
pub async fn list_tools() -> Json<Vec<ToolDescriptor>> {
    Json(tool_catalog())
}
