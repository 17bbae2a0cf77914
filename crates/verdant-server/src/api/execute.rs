// ABOUTME: Single-tool execution handler: looks up the named agent and runs it once.
// ABOUTME: Runs with an empty shared context and maps agent errors to HTTP error responses.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;
use verdant_core::{AgentError, Context};

use super::error_response;
use crate::app_state::SharedState;

/// Request body for executing a tool. An empty body means no parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ExecuteRequest {
    #[serde(default)]
    pub parameters: Value,
}

/// Parse an optional JSON body, treating an empty one as the default value.
pub(crate) fn parse_body<T>(body: &Bytes) -> Result<T, Response>
where
    T: Default + for<'de> Deserialize<'de>,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| {
        error_response(StatusCode::BAD_REQUEST, format!("invalid request body: {e}"))
    })
}

/// Map an agent failure to the status the caller should see.
pub(crate) fn agent_error_status(err: &AgentError) -> StatusCode {
    if err.is_caller_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// POST /execute/{tool_name} - Run one tool with the given parameters.
pub async fn execute_tool(
    State(state): State<SharedState>,
    Path(tool_name): Path<String>,
    body: Bytes,
) -> Response {
    let req: ExecuteRequest = match parse_body(&body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let Some(agent) = state.registry.lookup(&tool_name).await else {
        tracing::debug!(tool = %tool_name, "execute requested for unknown tool");
        return error_response(StatusCode::NOT_FOUND, "Tool not found");
    };

    let ctx = Context::new();
    let run = agent.execute(&req.parameters, &ctx);
    match tokio::time::timeout(state.agent_timeout, run).await {
        Ok(Ok(result)) => Json(serde_json::json!({ "result": result })).into_response(),
        Ok(Err(e)) => {
            tracing::error!(tool = %tool_name, error = %e, "tool execution failed");
            error_response(agent_error_status(&e), e.to_string())
        }
        Err(_) => {
            tracing::error!(tool = %tool_name, timeout = ?state.agent_timeout, "tool execution timed out");
            error_response(
                StatusCode::GATEWAY_TIMEOUT,
                format!("tool execution exceeded {:?}", state.agent_timeout),
            )
        }
    }
}
