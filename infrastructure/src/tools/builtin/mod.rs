//! Builtin tool provider
//!
//! Deterministic tools with no external dependencies. Currently a single
//! arithmetic tool, `add_numbers`.

use async_trait::async_trait;
use gauge_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    provider::{ProviderError, ToolProvider},
    value_objects::{ToolError, ToolResult},
};

/// Canonical tool name for the arithmetic tool.
pub const ADD_NUMBERS: &str = "add_numbers";

/// Create the [`ToolDefinition`] for `add_numbers`.
pub fn add_numbers_definition() -> ToolDefinition {
    ToolDefinition::new(ADD_NUMBERS, "Add two numbers and return the result.")
        .with_parameter(ToolParameter::new("a", "First addend", true).with_type("integer"))
        .with_parameter(ToolParameter::new("b", "Second addend", true).with_type("integer"))
}

/// Provider for builtin tools
pub struct BuiltinProvider;

impl BuiltinProvider {
    pub fn new() -> Self {
        Self
    }

    fn execute_add_numbers(call: &ToolCall) -> ToolResult {
        let a = match call.require_i64("a") {
            Ok(v) => v,
            Err(e) => return ToolResult::failure(ADD_NUMBERS, ToolError::invalid_argument(e)),
        };
        let b = match call.require_i64("b") {
            Ok(v) => v,
            Err(e) => return ToolResult::failure(ADD_NUMBERS, ToolError::invalid_argument(e)),
        };

        match a.checked_add(b) {
            Some(sum) => ToolResult::success(ADD_NUMBERS, sum.to_string()),
            None => ToolResult::failure(
                ADD_NUMBERS,
                ToolError::invalid_argument(format!("{} + {} overflows", a, b)),
            ),
        }
    }
}

impl Default for BuiltinProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolProvider for BuiltinProvider {
    fn id(&self) -> &str {
        "builtin"
    }

    fn priority(&self) -> i32 {
        -100
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError> {
        Ok(vec![add_numbers_definition()])
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        match call.tool_name.as_str() {
            ADD_NUMBERS => Self::execute_add_numbers(call),
            other => ToolResult::failure(other, ToolError::not_found(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_numbers() {
        let provider = BuiltinProvider::new();
        let call = ToolCall::new(ADD_NUMBERS).with_arg("a", 42).with_arg("b", 58);

        let result = provider.execute(&call).await;

        assert!(result.is_success());
        assert_eq!(result.output(), Some("100"));
    }

    #[tokio::test]
    async fn test_add_numbers_missing_argument() {
        let provider = BuiltinProvider::new();
        let call = ToolCall::new(ADD_NUMBERS).with_arg("a", 42);

        let result = provider.execute(&call).await;

        assert!(!result.is_success());
        assert_eq!(result.error().unwrap().code, "INVALID_ARGUMENT");
    }

    #[tokio::test]
    async fn test_add_numbers_overflow() {
        let provider = BuiltinProvider::new();
        let call = ToolCall::new(ADD_NUMBERS)
            .with_arg("a", i64::MAX)
            .with_arg("b", 1);

        let result = provider.execute(&call).await;

        assert!(!result.is_success());
    }

    #[tokio::test]
    async fn test_discover_tools() {
        let provider = BuiltinProvider::new();
        let tools = provider.discover_tools().await.unwrap();

        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0].name, ADD_NUMBERS);
    }
}
