//! Tool Registry
//!
//! The [`ToolRegistry`] aggregates multiple tool providers and implements
//! `ToolExecutorPort`. It handles tool discovery, provider resolution, and
//! execution routing based on priority.
//!
//! `discover()` must be called before the registry is used: providers are
//! sorted by priority (highest first), each provider's tools are
//! registered, and conflicts resolve to the higher-priority provider.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use gauge_application::ToolExecutorPort;
use gauge_domain::tool::{
    entities::{ToolCall, ToolSpec},
    provider::ToolProvider,
    value_objects::{ToolError, ToolResult},
};

/// Tool registry that aggregates multiple providers
pub struct ToolRegistry {
    providers: Vec<Arc<dyn ToolProvider>>,
    /// Tool name -> provider ID mapping (cached after discovery)
    tool_mapping: HashMap<String, String>,
    /// Merged tool specification
    tool_spec: ToolSpec,
    discovered: bool,
}

impl ToolRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            tool_mapping: HashMap::new(),
            tool_spec: ToolSpec::new(),
            discovered: false,
        }
    }

    /// Register a tool provider
    pub fn register<P: ToolProvider + 'static>(mut self, provider: P) -> Self {
        self.providers.push(Arc::new(provider));
        self.discovered = false;
        self
    }

    /// Discover tools from all providers
    ///
    /// Tools are merged with priority-based conflict resolution.
    pub async fn discover(&mut self) -> Result<(), String> {
        self.providers
            .sort_by_key(|p| std::cmp::Reverse(p.priority()));

        let mut tool_spec = ToolSpec::new();
        let mut tool_mapping = HashMap::new();

        for provider in &self.providers {
            if !provider.is_available().await {
                tracing::debug!(provider = provider.id(), "Provider not available, skipping");
                continue;
            }

            match provider.discover_tools().await {
                Ok(tools) => {
                    for tool in tools {
                        // Higher priority wins conflicts
                        if !tool_mapping.contains_key(&tool.name) {
                            tracing::debug!(
                                tool = %tool.name,
                                provider = provider.id(),
                                "Registered tool"
                            );
                            tool_mapping.insert(tool.name.clone(), provider.id().to_string());
                            tool_spec = tool_spec.register(tool);
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!(
                        provider = provider.id(),
                        error = %e,
                        "Failed to discover tools from provider"
                    );
                }
            }
        }

        self.tool_spec = tool_spec;
        self.tool_mapping = tool_mapping;
        self.discovered = true;

        Ok(())
    }

    fn provider_for(&self, tool_name: &str) -> Option<&Arc<dyn ToolProvider>> {
        let provider_id = self.tool_mapping.get(tool_name)?;
        self.providers.iter().find(|p| p.id() == provider_id)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolExecutorPort for ToolRegistry {
    fn tool_spec(&self) -> &ToolSpec {
        &self.tool_spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        if !self.discovered {
            return ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed("Registry not initialized. Call discover() first."),
            );
        }

        match self.provider_for(&call.tool_name) {
            Some(provider) => provider.execute(call).await,
            None => ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name)),
        }
    }
}
