//! `wiki_lookup` tool — encyclopedia summaries from the Wikipedia REST API.
//!
//! Uses the [page summary endpoint](https://en.wikipedia.org/api/rest_v1/)
//! which requires no API key and returns a plain-text extract for a title.
//! The query is used directly as the page title; Wikipedia's own
//! normalization and redirects handle casing and common variants.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `query` | string | Yes | Topic to look up |

use gauge_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult},
};

/// Canonical tool name for the encyclopedia lookup tool.
pub const WIKI_LOOKUP: &str = "wiki_lookup";

const WIKI_SUMMARY_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

/// Create the [`ToolDefinition`] for `wiki_lookup`.
pub fn wiki_lookup_definition() -> ToolDefinition {
    ToolDefinition::new(
        WIKI_LOOKUP,
        "Search Wikipedia and return a summary of the topic.",
    )
    .with_parameter(ToolParameter::new("query", "Topic to look up", true))
}

/// Execute the `wiki_lookup` tool — fetch and format a page summary.
pub async fn execute_wiki_lookup(client: &reqwest::Client, call: &ToolCall) -> ToolResult {
    let query = match call.require_string("query") {
        Ok(q) => q,
        Err(e) => return ToolResult::failure(WIKI_LOOKUP, ToolError::invalid_argument(e)),
    };

    let title = query.trim().replace(' ', "_");
    let url = format!("{}/{}", WIKI_SUMMARY_URL, title);

    let response = match client.get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            return ToolResult::failure(
                WIKI_LOOKUP,
                ToolError::execution_failed(format!("Wikipedia request failed: {}", e)),
            );
        }
    };

    if !response.status().is_success() {
        return ToolResult::failure(
            WIKI_LOOKUP,
            ToolError::execution_failed(format!(
                "Wikipedia returned {} for {:?}",
                response.status(),
                query
            )),
        );
    }

    let body: serde_json::Value = match response.json().await {
        Ok(j) => j,
        Err(e) => {
            return ToolResult::failure(
                WIKI_LOOKUP,
                ToolError::execution_failed(format!("Failed to parse Wikipedia response: {}", e)),
            );
        }
    };

    ToolResult::success(WIKI_LOOKUP, format_summary(query, &body))
}

/// Format a page-summary response into a readable snippet.
///
/// Uses the `title` and `extract` fields; falls back to a "no summary"
/// message when the extract is missing or empty.
fn format_summary(query: &str, data: &serde_json::Value) -> String {
    let title = data["title"].as_str().unwrap_or(query);
    let extract = data["extract"].as_str().unwrap_or("");

    if extract.is_empty() {
        return format!("No summary available for {:?}.", query);
    }

    let mut output = format!("## {}\n\n{}", title, extract);

    if let Some(url) = data["content_urls"]["desktop"]["page"].as_str() {
        output.push_str(&format!("\n\nSource: {}", url));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_summary_with_extract() {
        let data = serde_json::json!({
            "title": "MS Dhoni",
            "extract": "Mahendra Singh Dhoni is an Indian former international cricketer.",
            "content_urls": {
                "desktop": { "page": "https://en.wikipedia.org/wiki/MS_Dhoni" }
            }
        });

        let output = format_summary("MS Dhoni", &data);
        assert!(output.contains("MS Dhoni"));
        assert!(output.contains("Indian former international cricketer"));
        assert!(output.contains("https://en.wikipedia.org/wiki/MS_Dhoni"));
    }

    #[test]
    fn test_format_summary_empty_extract() {
        let data = serde_json::json!({ "title": "Nothing", "extract": "" });

        let output = format_summary("Nothing", &data);
        assert!(output.contains("No summary available"));
    }
}
