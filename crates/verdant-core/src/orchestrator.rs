// ABOUTME: Sequential workflow executor that chains registered agents.
// ABOUTME: Threads a running context holding every prior step's result into each later step.

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ulid::Ulid;

use crate::agent::{Context, merge_into};
use crate::error::OrchestrateError;
use crate::registry::AgentRegistry;

/// One step of a workflow: which agent to run and what to pass it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub agent: String,
    #[serde(default = "empty_input")]
    pub input: Value,
}

fn empty_input() -> Value {
    Value::Object(Context::new())
}

impl Step {
    pub fn new(agent: impl Into<String>, input: Value) -> Self {
        Self {
            agent: agent.into(),
            input,
        }
    }
}

/// Whether a step ran or was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Skipped,
}

/// Per-step execution record, in workflow order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub index: usize,
    pub agent: String,
    pub status: StepStatus,
    /// Zero for skipped steps.
    pub elapsed_ms: u64,
}

/// Outcome of a completed workflow run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Orchestration {
    pub id: Ulid,
    /// Most recent result per agent name.
    pub results: Context,
    /// Names of steps whose agent was not registered, in workflow order.
    pub skipped: Vec<String>,
    pub steps: Vec<StepReport>,
    /// Wall time of the whole run.
    pub elapsed_ms: u64,
}

impl Orchestration {
    fn new() -> Self {
        Self {
            id: Ulid::new(),
            results: Context::new(),
            skipped: Vec::new(),
            steps: Vec::new(),
            elapsed_ms: 0,
        }
    }
}

/// Runs workflows against a registry.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    registry: Arc<AgentRegistry>,
}

impl Orchestrator {
    pub fn new(registry: Arc<AgentRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<AgentRegistry> {
        &self.registry
    }

    /// Execute `workflow` step by step, in order.
    ///
    /// Steps naming an unregistered agent are skipped: they produce no result
    /// entry and are listed in [`Orchestration::skipped`]. After each step the
    /// full results map is merged into the running context, so every agent
    /// sees all results produced before it. The first failing step aborts
    /// the run and nothing after it executes.
    pub async fn orchestrate(&self, workflow: &[Step]) -> Result<Orchestration, OrchestrateError> {
        let started = Instant::now();
        let mut context = Context::new();
        let mut outcome = Orchestration::new();
        tracing::info!(id = %outcome.id, steps = workflow.len(), "starting workflow");

        for (index, step) in workflow.iter().enumerate() {
            let Some(agent) = self.registry.lookup(&step.agent).await else {
                tracing::warn!(index, agent = %step.agent, "skipping step: agent not registered");
                outcome.skipped.push(step.agent.clone());
                outcome.steps.push(StepReport {
                    index,
                    agent: step.agent.clone(),
                    status: StepStatus::Skipped,
                    elapsed_ms: 0,
                });
                continue;
            };

            let step_started = Instant::now();
            let result = agent
                .execute(&step.input, &context)
                .await
                .map_err(|source| {
                    tracing::error!(
                        id = %outcome.id,
                        index,
                        agent = %step.agent,
                        error = %source,
                        "workflow aborted"
                    );
                    OrchestrateError::StepFailed {
                        index,
                        agent: step.agent.clone(),
                        source,
                    }
                })?;
            let elapsed_ms = millis(step_started);
            tracing::debug!(index, agent = %step.agent, elapsed_ms, "step completed");

            outcome.steps.push(StepReport {
                index,
                agent: step.agent.clone(),
                status: StepStatus::Completed,
                elapsed_ms,
            });
            outcome.results.insert(step.agent.clone(), result);
            merge_into(&mut context, &outcome.results);
        }

        outcome.elapsed_ms = millis(started);
        tracing::info!(
            id = %outcome.id,
            completed = outcome.results.len(),
            skipped = outcome.skipped.len(),
            elapsed_ms = outcome.elapsed_ms,
            "workflow finished"
        );

        Ok(outcome)
    }
}

fn millis(since: Instant) -> u64 {
    u64::try_from(since.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::Agent;
    use crate::error::AgentError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records the context it saw and returns its input tagged with its label.
    struct Recorder {
        label: &'static str,
        seen: Mutex<Vec<Context>>,
    }

    impl Recorder {
        fn new(label: &'static str) -> Arc<Self> {
            Arc::new(Self {
                label,
                seen: Mutex::new(Vec::new()),
            })
        }

        fn seen(&self) -> Vec<Context> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Agent for Recorder {
        async fn process(&self, parameters: &Value, context: &Context) -> Result<Value, AgentError> {
            self.seen.lock().unwrap().push(context.clone());
            Ok(json!({ "from": self.label, "input": parameters }))
        }
    }

    struct Failing;

    #[async_trait]
    impl Agent for Failing {
        async fn process(&self, _: &Value, _: &Context) -> Result<Value, AgentError> {
            Err(AgentError::Failed("analysis unavailable".into()))
        }
    }

    async fn orchestrator_with(agents: Vec<(&str, Arc<dyn Agent>)>) -> Orchestrator {
        let registry = Arc::new(AgentRegistry::new());
        for (name, agent) in agents {
            registry.register(name, agent).await;
        }
        Orchestrator::new(registry)
    }

    #[tokio::test]
    async fn unregistered_step_is_skipped_silently() {
        let y = Recorder::new("Y");
        let orch = orchestrator_with(vec![("Y", y.clone() as Arc<dyn Agent>)]).await;

        let outcome = orch
            .orchestrate(&[
                Step::new("X", json!({ "n": 1 })),
                Step::new("Y", json!({ "n": 2 })),
            ])
            .await
            .unwrap();

        assert_eq!(
            Value::Object(outcome.results),
            json!({ "Y": { "from": "Y", "input": { "n": 2 } } })
        );
        assert_eq!(outcome.skipped, vec!["X".to_string()]);
        assert_eq!(
            outcome.steps,
            vec![
                StepReport {
                    index: 0,
                    agent: "X".into(),
                    status: StepStatus::Skipped,
                    elapsed_ms: 0,
                },
                StepReport {
                    index: 1,
                    agent: "Y".into(),
                    status: StepStatus::Completed,
                    elapsed_ms: outcome.steps[1].elapsed_ms,
                },
            ]
        );
        // X never ran, so Y saw an empty context.
        assert_eq!(y.seen(), vec![Context::new()]);
    }

    #[tokio::test]
    async fn second_step_sees_first_result() {
        let a = Recorder::new("A");
        let b = Recorder::new("B");
        let orch = orchestrator_with(vec![
            ("A", a.clone() as Arc<dyn Agent>),
            ("B", b.clone() as Arc<dyn Agent>),
        ])
        .await;

        orch.orchestrate(&[Step::new("A", json!(1)), Step::new("B", json!(2))])
            .await
            .unwrap();

        let seen = b.seen();
        let seen_by_b = &seen[0];
        assert_eq!(seen_by_b.get("A"), Some(&json!({ "from": "A", "input": 1 })));
    }

    #[tokio::test]
    async fn later_steps_see_every_prior_result() {
        let a = Recorder::new("A");
        let b = Recorder::new("B");
        let c = Recorder::new("C");
        let orch = orchestrator_with(vec![
            ("A", a.clone() as Arc<dyn Agent>),
            ("B", b.clone() as Arc<dyn Agent>),
            ("C", c.clone() as Arc<dyn Agent>),
        ])
        .await;

        orch.orchestrate(&[
            Step::new("A", json!("a")),
            Step::new("B", json!("b")),
            Step::new("C", json!("c")),
        ])
        .await
        .unwrap();

        let seen = c.seen();
        let seen_by_c = &seen[0];
        assert!(seen_by_c.contains_key("A"));
        assert!(seen_by_c.contains_key("B"));
        assert!(!seen_by_c.contains_key("C"));
    }

    #[tokio::test]
    async fn repeated_agent_keeps_latest_result() {
        let a = Recorder::new("A");
        let orch = orchestrator_with(vec![("A", a.clone() as Arc<dyn Agent>)]).await;

        let outcome = orch
            .orchestrate(&[Step::new("A", json!("first")), Step::new("A", json!("second"))])
            .await
            .unwrap();

        assert_eq!(outcome.results["A"]["input"], json!("second"));
        // The second run saw the first run's result under its own name.
        assert_eq!(a.seen()[1]["A"]["input"], json!("first"));
    }

    #[tokio::test]
    async fn failing_step_aborts_remaining_workflow() {
        let a = Recorder::new("A");
        let c = Recorder::new("C");
        let orch = orchestrator_with(vec![
            ("A", a.clone() as Arc<dyn Agent>),
            ("B", Arc::new(Failing) as Arc<dyn Agent>),
            ("C", c.clone() as Arc<dyn Agent>),
        ])
        .await;

        let err = orch
            .orchestrate(&[
                Step::new("A", json!({})),
                Step::new("B", json!({})),
                Step::new("C", json!({})),
            ])
            .await
            .unwrap_err();

        match err {
            OrchestrateError::StepFailed { index, agent, source } => {
                assert_eq!(index, 1);
                assert_eq!(agent, "B");
                assert_eq!(source.to_string(), "analysis unavailable");
            }
        }
        assert_eq!(a.seen().len(), 1);
        assert!(c.seen().is_empty(), "steps after the failure must not run");
    }

    #[tokio::test]
    async fn context_does_not_leak_between_runs() {
        let a = Recorder::new("A");
        let b = Recorder::new("B");
        let orch = orchestrator_with(vec![
            ("A", a.clone() as Arc<dyn Agent>),
            ("B", b.clone() as Arc<dyn Agent>),
        ])
        .await;

        orch.orchestrate(&[Step::new("A", json!(1))]).await.unwrap();
        orch.orchestrate(&[Step::new("B", json!(2))]).await.unwrap();

        assert!(b.seen()[0].is_empty());
    }

    #[tokio::test]
    async fn empty_workflow_returns_empty_results() {
        let orch = orchestrator_with(vec![]).await;
        let outcome = orch.orchestrate(&[]).await.unwrap();
        assert!(outcome.results.is_empty());
        assert!(outcome.skipped.is_empty());
        assert!(outcome.steps.is_empty());
    }

    /// Takes a fixed nap so elapsed times are measurable.
    struct Napper;

    #[async_trait]
    impl Agent for Napper {
        async fn process(&self, _: &Value, _: &Context) -> Result<Value, AgentError> {
            tokio::time::sleep(std::time::Duration::from_millis(15)).await;
            Ok(Value::Null)
        }
    }

    #[tokio::test]
    async fn run_reports_timing_per_step_and_overall() {
        let orch = orchestrator_with(vec![("nap", Arc::new(Napper) as Arc<dyn Agent>)]).await;

        let outcome = orch
            .orchestrate(&[Step::new("nap", json!({})), Step::new("nap", json!({}))])
            .await
            .unwrap();

        assert_eq!(outcome.steps.len(), 2);
        for (i, report) in outcome.steps.iter().enumerate() {
            assert_eq!(report.index, i);
            assert_eq!(report.status, StepStatus::Completed);
            assert!(report.elapsed_ms >= 15, "step {i} took {}ms", report.elapsed_ms);
        }
        let step_total: u64 = outcome.steps.iter().map(|r| r.elapsed_ms).sum();
        assert!(outcome.elapsed_ms >= step_total);
    }

    #[tokio::test]
    async fn each_run_gets_a_distinct_id() {
        let orch = orchestrator_with(vec![]).await;
        let first = orch.orchestrate(&[]).await.unwrap();
        let second = orch.orchestrate(&[]).await.unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn outcome_serializes_run_metadata() {
        let mut outcome = Orchestration::new();
        outcome.steps.push(StepReport {
            index: 0,
            agent: "A".into(),
            status: StepStatus::Skipped,
            elapsed_ms: 0,
        });
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["id"], json!(outcome.id.to_string()));
        assert_eq!(
            json["steps"],
            json!([{ "index": 0, "agent": "A", "status": "skipped", "elapsed_ms": 0 }])
        );
        assert_eq!(json["elapsed_ms"], 0);
    }

    #[test]
    fn step_input_defaults_to_empty_object() {
        let step: Step = serde_json::from_value(json!({ "agent": "A" })).unwrap();
        assert_eq!(step.input, json!({}));
    }
}
