//! Tool provider abstraction
//!
//! [`ToolProvider`] abstracts a source of tools that can be plugged into
//! the tool registry. The harness ships two providers: the builtin provider
//! (deterministic arithmetic) and the web provider (encyclopedia lookup and
//! web search over HTTP). When multiple providers offer the same tool, the
//! registry prefers the one with the higher priority.

use async_trait::async_trait;
use thiserror::Error;

use super::entities::{ToolCall, ToolDefinition};
use super::value_objects::ToolResult;

/// Error type for tool provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider is not available (e.g., no network access)
    #[error("Provider not available: {0}")]
    NotAvailable(String),

    /// Failed to discover tools from the provider
    #[error("Discovery failed: {0}")]
    DiscoveryFailed(String),
}

/// Tool provider abstraction - external source of tools
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// Unique identifier for this provider (e.g. "builtin", "web")
    fn id(&self) -> &str;

    /// Priority for tool resolution (higher = preferred)
    fn priority(&self) -> i32 {
        0
    }

    /// Check if the provider is available and properly configured
    async fn is_available(&self) -> bool;

    /// Discover available tools from this provider
    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError>;

    /// Execute a tool call
    ///
    /// The tool_name in the call must match one of the tools returned by
    /// `discover_tools()`.
    async fn execute(&self, call: &ToolCall) -> ToolResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::value_objects::ToolError;

    struct MockProvider {
        id: String,
        tools: Vec<ToolDefinition>,
        available: bool,
    }

    impl MockProvider {
        fn new(id: &str, available: bool) -> Self {
            Self {
                id: id.to_string(),
                tools: Vec::new(),
                available,
            }
        }

        fn with_tool(mut self, name: &str) -> Self {
            self.tools
                .push(ToolDefinition::new(name, format!("Mock tool: {}", name)));
            self
        }
    }

    #[async_trait]
    impl ToolProvider for MockProvider {
        fn id(&self) -> &str {
            &self.id
        }

        async fn is_available(&self) -> bool {
            self.available
        }

        async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError> {
            if self.available {
                Ok(self.tools.clone())
            } else {
                Err(ProviderError::NotAvailable("Mock not available".into()))
            }
        }

        async fn execute(&self, call: &ToolCall) -> ToolResult {
            if self.tools.iter().any(|t| t.name == call.tool_name) {
                ToolResult::success(&call.tool_name, "Mock output")
            } else {
                ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name))
            }
        }
    }

    #[tokio::test]
    async fn test_provider_discovery() {
        let provider = MockProvider::new("mock", true)
            .with_tool("tool_a")
            .with_tool("tool_b");

        assert!(provider.is_available().await);

        let tools = provider.discover_tools().await.unwrap();
        assert_eq!(tools.len(), 2);
        assert!(tools.iter().any(|t| t.name == "tool_a"));
    }

    #[tokio::test]
    async fn test_provider_not_available() {
        let provider = MockProvider::new("mock", false);

        assert!(!provider.is_available().await);
        assert!(provider.discover_tools().await.is_err());
    }

    #[tokio::test]
    async fn test_provider_execute() {
        let provider = MockProvider::new("mock", true).with_tool("add_numbers");

        let call = ToolCall::new("add_numbers").with_arg("a", 1).with_arg("b", 2);
        let result = provider.execute(&call).await;

        assert!(result.is_success());
    }
}
