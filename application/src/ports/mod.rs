//! Port definitions — interfaces the application layer depends on.
//!
//! Implementations (adapters) live in the infrastructure layer.

pub mod agent_invoker;
pub mod correctness_judge;
pub mod policy_gate;
pub mod progress;
pub mod tool_executor;
