//! Domain layer for agent-gauge
//!
//! This crate contains the core evaluation entities, value objects, and the
//! pure scoring logic. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Trajectory
//!
//! The ordered sequence of tool names an agent invoked while answering one
//! test case. Trajectories are extracted from an [`InvocationResult`] and
//! scored against the expected tool sequence of an [`EvaluationCase`].
//!
//! ## Gate Decision
//!
//! The structured outcome of passing a raw user input through the policy
//! gate before the agent runs: allow, block, or rewrite.

pub mod evaluation;
pub mod invocation;
pub mod policy;
pub mod session;
pub mod tool;

// Re-export commonly used types
pub use evaluation::{
    case::EvaluationCase,
    result::EvaluationResult,
    trajectory::{extract_trajectory, trajectory_match_score},
};
pub use invocation::{InvocationResult, ToolStep};
pub use policy::GateDecision;
pub use session::response::{ContentBlock, LlmResponse, StopReason};
pub use tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter, ToolSpec},
    provider::{ProviderError, ToolProvider},
    value_objects::{ToolError, ToolResult},
};
