//! Invocation result entities
//!
//! [`InvocationResult`] is the raw product of one agent run: the final
//! answer text plus the ordered log of tool steps the agent took. It is
//! produced once per case by the agent invoker and never mutated afterward.

use serde::{Deserialize, Serialize};

/// A single tool invocation recorded during an agent run.
///
/// Order within [`InvocationResult::steps`] is execution order, which is
/// significant for trajectory scoring. A step whose `tool_name` is blank
/// carries no tool identifier and is skipped during trajectory extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolStep {
    /// Name of the tool that was invoked
    pub tool_name: String,
    /// Arguments the agent passed to the tool
    pub tool_input: serde_json::Value,
    /// Output the tool returned
    pub tool_output: String,
}

impl ToolStep {
    pub fn new(
        tool_name: impl Into<String>,
        tool_input: serde_json::Value,
        tool_output: impl Into<String>,
    ) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_input,
            tool_output: tool_output.into(),
        }
    }

    /// Whether this step carries a usable tool identifier.
    pub fn has_tool_name(&self) -> bool {
        !self.tool_name.trim().is_empty()
    }
}

/// The complete result of one agent invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationResult {
    /// Final answer text produced by the agent
    pub output_text: String,
    /// Ordered log of tool steps, in execution order
    pub steps: Vec<ToolStep>,
}

impl InvocationResult {
    pub fn new(output_text: impl Into<String>, steps: Vec<ToolStep>) -> Self {
        Self {
            output_text: output_text.into(),
            steps,
        }
    }

    /// An invocation that produced an answer without using any tools.
    pub fn text_only(output_text: impl Into<String>) -> Self {
        Self::new(output_text, Vec::new())
    }
}
