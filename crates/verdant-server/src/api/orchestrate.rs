// ABOUTME: Workflow handler that runs an ordered list of agent steps through the orchestrator.
// ABOUTME: Returns per-agent results plus skipped step names, or the failing step's error.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use verdant_core::{OrchestrateError, Step};

use super::error_response;
use super::execute::{agent_error_status, parse_body};
use crate::app_state::SharedState;

/// Request body for running a workflow.
#[derive(Debug, Default, Deserialize)]
pub struct OrchestrateRequest {
    #[serde(default)]
    pub workflow: Vec<Step>,
}

/// POST /orchestrate - Run a multi-step workflow.
pub async fn orchestrate(State(state): State<SharedState>, body: Bytes) -> Response {
    let req: OrchestrateRequest = match parse_body(&body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let run = state.orchestrator.orchestrate(&req.workflow);
    match tokio::time::timeout(state.agent_timeout, run).await {
        Ok(Ok(outcome)) => Json(outcome).into_response(),
        Ok(Err(OrchestrateError::StepFailed {
            index,
            agent,
            source,
        })) => (
            agent_error_status(&source),
            Json(serde_json::json!({
                "error": source.to_string(),
                "step": index,
                "agent": agent,
            })),
        )
            .into_response(),
        Err(_) => {
            tracing::error!(
                steps = req.workflow.len(),
                timeout = ?state.agent_timeout,
                "workflow timed out"
            );
            error_response(
                StatusCode::GATEWAY_TIMEOUT,
                format!("workflow exceeded {:?}", state.agent_timeout),
            )
        }
    }
}
