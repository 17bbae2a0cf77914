// ABOUTME: Name-to-agent lookup table shared by the HTTP layer and the orchestrator.
// ABOUTME: Built once at startup and injected; registration replaces any previous entry.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::agent::{Agent, AgentHandle};

/// Registry of live agents keyed by tool name.
#[derive(Debug, Default)]
pub struct AgentRegistry {
    agents: RwLock<HashMap<String, Arc<AgentHandle>>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `agent` under `name`. Last write wins.
    pub async fn register(&self, name: impl Into<String>, agent: Arc<dyn Agent>) {
        let name = name.into();
        let handle = Arc::new(AgentHandle::new(name.clone(), agent));
        if self.agents.write().await.insert(name.clone(), handle).is_some() {
            tracing::warn!(agent = %name, "replaced previously registered agent");
        } else {
            tracing::debug!(agent = %name, "registered agent");
        }
    }

    /// Look up the agent registered under `name`.
    pub async fn lookup(&self, name: &str) -> Option<Arc<AgentHandle>> {
        self.agents.read().await.get(name).cloned()
    }

    /// Registered names, sorted.
    pub async fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.agents.read().await.keys().cloned().collect();
        names.sort();
        names
    }
}
