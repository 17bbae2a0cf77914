// ABOUTME: Defines the Agent trait that every tool implementation provides, plus AgentHandle.
// ABOUTME: AgentHandle owns an agent's sticky context and merges shared context into it on each call.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AgentError;

/// String-keyed context passed between agents. Values are arbitrary JSON.
pub type Context = serde_json::Map<String, Value>;

/// A unit implementing one named capability.
///
/// `process` receives the per-call parameters and an immutable snapshot of
/// the agent's context as it stood right after the shared context was
/// merged in. Implementations may await freely; no lock is held while
/// they run.
#[async_trait]
pub trait Agent: Send + Sync {
    async fn process(&self, parameters: &Value, context: &Context) -> Result<Value, AgentError>;
}

/// A registered agent together with the context it accumulates across calls.
pub struct AgentHandle {
    name: String,
    agent: Arc<dyn Agent>,
    context: Mutex<Context>,
}

impl AgentHandle {
    /// Wrap an agent under the given name with an empty context.
    pub fn new(name: impl Into<String>, agent: Arc<dyn Agent>) -> Self {
        Self {
            name: name.into(),
            agent,
            context: Mutex::new(Context::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Merge `shared` into this agent's context, then run the agent.
    ///
    /// The merge is shallow: keys in `shared` overwrite existing keys, and
    /// keys only present in the existing context survive. The merge and the
    /// snapshot handed to `process` happen under one lock, so concurrent
    /// callers each see a context that is the result of whole merges.
    pub async fn execute(&self, parameters: &Value, shared: &Context) -> Result<Value, AgentError> {
        let snapshot = {
            let mut context = self.context.lock().unwrap_or_else(PoisonError::into_inner);
            merge_into(&mut context, shared);
            context.clone()
        };

        tracing::debug!(
            agent = %self.name,
            shared_keys = shared.len(),
            context_keys = snapshot.len(),
            "executing agent"
        );

        self.agent.process(parameters, &snapshot).await
    }

    /// Snapshot of the context accumulated so far.
    pub fn context(&self) -> Context {
        self.context
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl std::fmt::Debug for AgentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentHandle")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Shallow merge: every key of `incoming` replaces the same key in `target`.
pub(crate) fn merge_into(target: &mut Context, incoming: &Context) {
    for (key, value) in incoming {
        target.insert(key.clone(), value.clone());
    }
}
