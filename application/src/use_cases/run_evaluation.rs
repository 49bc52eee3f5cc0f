//! Run Evaluation use case.
//!
//! Drives the full evaluation pipeline for a fixed list of cases:
//! policy-gated invocation, trajectory extraction and scoring, correctness
//! judgment, and result assembly. Cases are processed sequentially and
//! independently: one case's invocation failure is recorded as a visible
//! marker and never aborts the remaining cases. Only an unavailable policy
//! gate is fatal to the run.

use crate::config::{EvaluationParams, GateMode};
use crate::ports::agent_invoker::{AgentInvokerPort, InvokerError};
use crate::ports::correctness_judge::CorrectnessJudgePort;
use crate::ports::policy_gate::{PolicyGateError, PolicyGatePort};
use crate::ports::progress::EvalProgressNotifier;
use gauge_domain::{
    extract_trajectory, trajectory_match_score, EvaluationCase, EvaluationResult,
    InvocationResult, ToolStep,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Errors fatal to the whole evaluation run
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// The policy gate is unreachable; execution must not silently proceed.
    #[error("Policy gate unavailable: {0}")]
    PolicyUnavailable(String),
}

impl From<PolicyGateError> for EvalError {
    fn from(err: PolicyGateError) -> Self {
        match err {
            PolicyGateError::Unavailable(msg) => EvalError::PolicyUnavailable(msg),
        }
    }
}

/// Outcome of one policy-gated invocation, before scoring.
enum GuardedOutcome {
    /// The gate blocked the case (enforcing mode only).
    Blocked { reason: String },
    /// The agent ran to completion.
    Completed {
        result: InvocationResult,
        latency: Duration,
    },
    /// The agent failed partway; the partial step log is kept.
    Failed {
        message: String,
        partial_steps: Vec<ToolStep>,
        latency: Duration,
    },
}

/// Use case for running the evaluation over a list of cases.
pub struct RunEvaluationUseCase<P: PolicyGatePort, A: AgentInvokerPort, J: CorrectnessJudgePort> {
    gate: Arc<P>,
    invoker: Arc<A>,
    judge: Arc<J>,
    params: EvaluationParams,
}

impl<P, A, J> RunEvaluationUseCase<P, A, J>
where
    P: PolicyGatePort + 'static,
    A: AgentInvokerPort + 'static,
    J: CorrectnessJudgePort + 'static,
{
    pub fn new(gate: Arc<P>, invoker: Arc<A>, judge: Arc<J>, params: EvaluationParams) -> Self {
        Self {
            gate,
            invoker,
            judge,
            params,
        }
    }

    /// Evaluate all cases in order and return one result per case.
    ///
    /// Output order matches input order; every requested case produces a
    /// result, failed ones carrying an explicit failure marker.
    pub async fn execute(
        &self,
        cases: &[EvaluationCase],
        progress: &dyn EvalProgressNotifier,
    ) -> Result<Vec<EvaluationResult>, EvalError> {
        progress.on_run_start(cases.len());

        let mut results = Vec::with_capacity(cases.len());
        let total = cases.len();

        for (index, case) in cases.iter().enumerate() {
            progress.on_case_start(case, index + 1, total);

            let result = self.evaluate_case(case).await?;
            progress.on_case_complete(&result, index + 1, total);
            results.push(result);
        }

        progress.on_run_complete();
        Ok(results)
    }

    /// Run one case through the gated agent and assemble its result.
    async fn evaluate_case(&self, case: &EvaluationCase) -> Result<EvaluationResult, EvalError> {
        let outcome = self.guarded_invoke(&case.input).await?;

        let result = match outcome {
            GuardedOutcome::Completed { result, latency } => {
                let actual_tools = extract_trajectory(&result);
                let trajectory_score = trajectory_match_score(&case.expected_tools, &actual_tools);
                let correctness = self.judge_correctness(case, &result.output_text).await;

                EvaluationResult::completed(
                    case,
                    result.output_text,
                    correctness,
                    latency,
                    actual_tools,
                    trajectory_score,
                )
            }
            GuardedOutcome::Failed {
                message,
                partial_steps,
                latency,
            } => {
                warn!(input = %case.input, error = %message, "Case invocation failed");
                let partial = InvocationResult::new(String::new(), partial_steps);
                let actual_tools = extract_trajectory(&partial);
                let trajectory_score = trajectory_match_score(&case.expected_tools, &actual_tools);

                EvaluationResult::failed(case, message, latency, actual_tools, trajectory_score)
            }
            GuardedOutcome::Blocked { reason } => {
                info!(input = %case.input, reason = %reason, "Case blocked by policy gate");
                let trajectory_score = trajectory_match_score(&case.expected_tools, &[]);

                EvaluationResult::failed(
                    case,
                    format!("blocked by policy gate: {}", reason),
                    Duration::ZERO,
                    Vec::new(),
                    trajectory_score,
                )
            }
        };

        Ok(result)
    }

    /// Pass one input through the policy gate, then invoke the agent.
    ///
    /// In `Advisory` mode the gate's decision is informational only and the
    /// agent always runs with the original input. In `Enforcing` mode a
    /// `Block` decision stops the case and a `Rewrite` decision substitutes
    /// its text. Latency measurement wraps only the invocation call.
    async fn guarded_invoke(&self, input: &str) -> Result<GuardedOutcome, EvalError> {
        let decision = self.gate.evaluate(input).await?;
        info!(%decision, "Policy gate decision");

        let effective_input = match (self.params.gate_mode, &decision) {
            (GateMode::Enforcing, gauge_domain::GateDecision::Block { reason }) => {
                return Ok(GuardedOutcome::Blocked {
                    reason: reason.clone(),
                });
            }
            (GateMode::Enforcing, _) => decision.effective_input(input).to_string(),
            (GateMode::Advisory, _) => input.to_string(),
        };

        let start = Instant::now();
        let invocation = self.invoke_with_timeout(&effective_input).await;
        let latency = start.elapsed();

        Ok(match invocation {
            Ok(result) => GuardedOutcome::Completed { result, latency },
            Err(InvokerError::Failed {
                message,
                partial_steps,
            }) => GuardedOutcome::Failed {
                message,
                partial_steps,
                latency,
            },
        })
    }

    async fn invoke_with_timeout(&self, input: &str) -> Result<InvocationResult, InvokerError> {
        match self.params.case_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.invoker.invoke(input)).await {
                Ok(result) => result,
                Err(_) => Err(InvokerError::failed(format!(
                    "invocation timed out after {:.0}s",
                    limit.as_secs_f64()
                ))),
            },
            None => self.invoker.invoke(input).await,
        }
    }

    /// Judge the answer; a failed judgment degrades to `None` so the case
    /// keeps its trajectory data.
    async fn judge_correctness(&self, case: &EvaluationCase, prediction: &str) -> Option<f64> {
        if !self.params.judge_enabled {
            return None;
        }

        match self
            .judge
            .evaluate(&case.input, prediction, &case.reference)
            .await
        {
            Ok(judgment) => Some(judgment.score),
            Err(e) => {
                warn!(input = %case.input, error = %e, "Correctness judgment failed");
                None
            }
        }
    }
}
