// ABOUTME: Error types raised by agents and by the orchestrator.
// ABOUTME: Unknown tools and skipped workflow steps are outcomes, not errors, and live elsewhere.

use thiserror::Error;

/// Errors an agent can raise while processing a single invocation.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The caller supplied parameters the agent cannot work with.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("{0}")]
    Failed(String),
}

impl AgentError {
    /// True when the failure was caused by the caller's input rather than the agent.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, AgentError::InvalidParameters(_))
    }
}

/// Errors that abort a workflow run.
#[derive(Debug, Error)]
pub enum OrchestrateError {
    #[error("step {index} ({agent}) failed: {source}")]
    StepFailed {
        index: usize,
        agent: String,
        #[source]
        source: AgentError,
    },
}
