//! Infrastructure layer for agent-gauge
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the rule-based policy gate, the Bedrock agent invoker
//! and correctness judge, the tool registry with its providers, and
//! configuration file loading.

pub mod config;
pub mod guardrails;
pub mod tools;

#[cfg(feature = "bedrock")]
pub mod judge;
#[cfg(feature = "bedrock")]
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, GateRuleConfig, ProviderConfig};
pub use guardrails::RuleBasedPolicyGate;
pub use tools::{default_tool_spec, BuiltinProvider, ToolRegistry};

#[cfg(feature = "bedrock")]
pub use judge::QaJudge;
#[cfg(feature = "bedrock")]
pub use providers::bedrock::BedrockAgentInvoker;
#[cfg(feature = "web-tools")]
pub use tools::WebToolProvider;
