//! Web tool provider (`web-tools` feature)
//!
//! HTTP-backed tools sharing one `reqwest::Client`: `wiki_lookup` for
//! encyclopedia summaries and `web_search` for DuckDuckGo instant answers.

pub mod search;
pub mod wiki;

use async_trait::async_trait;
use gauge_domain::tool::{
    entities::{ToolCall, ToolDefinition},
    provider::{ProviderError, ToolProvider},
    value_objects::{ToolError, ToolResult},
};
use std::time::Duration;

/// Provider for HTTP-backed tools
pub struct WebToolProvider {
    client: reqwest::Client,
}

impl WebToolProvider {
    /// Create the provider with a 30-second request timeout.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("agent-gauge/0.4 (evaluation harness)")
            .build()
            .unwrap_or_default();

        Self { client }
    }
}

impl Default for WebToolProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolProvider for WebToolProvider {
    fn id(&self) -> &str {
        "web"
    }

    fn priority(&self) -> i32 {
        50
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn discover_tools(&self) -> Result<Vec<ToolDefinition>, ProviderError> {
        Ok(vec![
            wiki::wiki_lookup_definition(),
            search::web_search_definition(),
        ])
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        match call.tool_name.as_str() {
            wiki::WIKI_LOOKUP => wiki::execute_wiki_lookup(&self.client, call).await,
            search::WEB_SEARCH => search::execute_web_search(&self.client, call).await,
            other => ToolResult::failure(other, ToolError::not_found(other)),
        }
    }
}
