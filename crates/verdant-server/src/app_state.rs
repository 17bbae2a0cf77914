// ABOUTME: Shared application state for the verdant HTTP server.
// ABOUTME: Holds the agent registry, the orchestrator built over it, and the execution timeout.

use std::sync::Arc;
use std::time::Duration;

use verdant_agents::{DataGeneratorAgent, GENERATOR_TOOL_NAME, GeneratorDefaults};
use verdant_core::{AgentRegistry, Orchestrator};

/// Shared application state accessible by all Axum handlers.
pub struct AppState {
    pub registry: Arc<AgentRegistry>,
    pub orchestrator: Orchestrator,
    pub agent_timeout: Duration,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    /// Create state over an already populated registry.
    pub fn new(registry: Arc<AgentRegistry>, agent_timeout: Duration) -> Self {
        Self {
            orchestrator: Orchestrator::new(Arc::clone(&registry)),
            registry,
            agent_timeout,
        }
    }
}

/// Build a registry holding every built-in agent.
pub async fn default_registry(generator: GeneratorDefaults) -> Arc<AgentRegistry> {
    let registry = Arc::new(AgentRegistry::new());
    registry
        .register(
            GENERATOR_TOOL_NAME,
            Arc::new(DataGeneratorAgent::new(generator)),
        )
        .await;
    registry
}
