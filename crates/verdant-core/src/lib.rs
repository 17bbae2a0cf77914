// ABOUTME: Core library for verdant, containing the agent contract and orchestration protocol.
// ABOUTME: Defines agents, the name-to-agent registry, the sequential orchestrator, and tool metadata.

pub mod agent;
pub mod catalog;
pub mod error;
pub mod orchestrator;
pub mod registry;

pub use agent::{Agent, AgentHandle, Context};
pub use catalog::{ParameterSpec, ToolDescriptor, tool_catalog};
pub use error::{AgentError, OrchestrateError};
pub use orchestrator::{Orchestration, Orchestrator, Step, StepReport, StepStatus};
pub use registry::AgentRegistry;
