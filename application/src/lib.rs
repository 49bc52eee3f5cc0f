//! Application layer for agent-gauge
//!
//! This crate contains the evaluation-run use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{EvaluationParams, GateMode};
pub use ports::{
    agent_invoker::{AgentInvokerPort, InvokerError},
    correctness_judge::{CorrectnessJudgePort, JudgeError, Judgment},
    policy_gate::{PolicyGateError, PolicyGatePort},
    progress::{EvalProgressNotifier, NoProgress},
    tool_executor::ToolExecutorPort,
};
pub use use_cases::run_evaluation::{EvalError, RunEvaluationUseCase};
