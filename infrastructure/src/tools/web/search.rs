//! `web_search` tool — instant answers from the DuckDuckGo API.
//!
//! Uses the [DuckDuckGo Instant Answer API](https://api.duckduckgo.com/)
//! which requires no API key and returns abstracts, direct answers,
//! definitions, and related topics rather than full result listings.
//!
//! # Parameters
//!
//! | Name | Type | Required | Description |
//! |------|------|:---:|-------------|
//! | `query` | string | Yes | The search query |

use gauge_domain::tool::{
    entities::{ToolCall, ToolDefinition, ToolParameter},
    value_objects::{ToolError, ToolResult},
};

/// Canonical tool name for the web search tool.
pub const WEB_SEARCH: &str = "web_search";

const DDG_API_URL: &str = "https://api.duckduckgo.com/";

/// Create the [`ToolDefinition`] for `web_search`.
pub fn web_search_definition() -> ToolDefinition {
    ToolDefinition::new(
        WEB_SEARCH,
        "Search the web and return instant answers, abstracts, and related topics.",
    )
    .with_parameter(ToolParameter::new("query", "The search query", true))
}

/// Execute the `web_search` tool — query DuckDuckGo and format results.
pub async fn execute_web_search(client: &reqwest::Client, call: &ToolCall) -> ToolResult {
    let query = match call.require_string("query") {
        Ok(q) => q,
        Err(e) => return ToolResult::failure(WEB_SEARCH, ToolError::invalid_argument(e)),
    };

    let response = match client
        .get(DDG_API_URL)
        .query(&[
            ("q", query),
            ("format", "json"),
            ("no_html", "1"),
            ("skip_disambig", "1"),
        ])
        .send()
        .await
    {
        Ok(r) => r,
        Err(e) => {
            return ToolResult::failure(
                WEB_SEARCH,
                ToolError::execution_failed(format!("Search request failed: {}", e)),
            );
        }
    };

    if !response.status().is_success() {
        return ToolResult::failure(
            WEB_SEARCH,
            ToolError::execution_failed(format!(
                "Search API returned error: {}",
                response.status()
            )),
        );
    }

    let body: serde_json::Value = match response.json().await {
        Ok(j) => j,
        Err(e) => {
            return ToolResult::failure(
                WEB_SEARCH,
                ToolError::execution_failed(format!("Failed to parse search results: {}", e)),
            );
        }
    };

    ToolResult::success(WEB_SEARCH, format_search_results(query, &body))
}

fn non_empty_str<'a>(data: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    data[key].as_str().filter(|s| !s.is_empty())
}

/// Format a DuckDuckGo response into a readable markdown document.
///
/// Extracts AbstractText, Answer, Definition, and up to five related
/// topics. Falls back to a "no instant answer" message when nothing is
/// populated.
fn format_search_results(query: &str, data: &serde_json::Value) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(format!("## Search Results for: {}", query));

    if let Some(abstract_text) = non_empty_str(data, "AbstractText") {
        let source = data["AbstractSource"].as_str().unwrap_or("Unknown");
        let url = data["AbstractURL"].as_str().unwrap_or("");
        sections.push(format!(
            "### Summary ({})\n{}\nSource: {}",
            source, abstract_text, url
        ));
    }

    if let Some(answer) = non_empty_str(data, "Answer") {
        sections.push(format!("### Instant Answer\n{}", answer));
    }

    if let Some(definition) = non_empty_str(data, "Definition") {
        let source = data["DefinitionSource"].as_str().unwrap_or("Unknown");
        sections.push(format!("### Definition ({})\n{}", source, definition));
    }

    if let Some(topics) = data["RelatedTopics"].as_array() {
        let topic_texts: Vec<String> = topics
            .iter()
            .filter_map(|t| {
                let text = non_empty_str(t, "Text")?;
                let url = t["FirstURL"].as_str().unwrap_or("");
                Some(format!("- {} ({})", text, url))
            })
            .take(5)
            .collect();

        if !topic_texts.is_empty() {
            sections.push(format!("### Related Topics\n{}", topic_texts.join("\n")));
        }
    }

    if sections.len() == 1 {
        // Only the header, no results found
        sections.push("No instant answer available for this query.".to_string());
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_search_results_with_abstract() {
        let data = serde_json::json!({
            "AbstractText": "Rust is a systems programming language.",
            "AbstractSource": "Wikipedia",
            "AbstractURL": "https://en.wikipedia.org/wiki/Rust_(programming_language)",
            "Answer": "",
            "Definition": "",
            "RelatedTopics": []
        });

        let output = format_search_results("Rust programming", &data);
        assert!(output.contains("Rust programming"));
        assert!(output.contains("systems programming language"));
        assert!(output.contains("Wikipedia"));
    }

    #[test]
    fn test_format_search_results_empty() {
        let data = serde_json::json!({
            "AbstractText": "",
            "Answer": "",
            "Definition": "",
            "RelatedTopics": []
        });

        let output = format_search_results("obscure query", &data);
        assert!(output.contains("No instant answer available"));
    }

    #[test]
    fn test_format_search_results_with_related_topics() {
        let data = serde_json::json!({
            "AbstractText": "",
            "Answer": "",
            "Definition": "",
            "RelatedTopics": [
                { "Text": "Topic 1 description", "FirstURL": "https://example.com/1" },
                { "Text": "Topic 2 description", "FirstURL": "https://example.com/2" }
            ]
        });

        let output = format_search_results("test", &data);
        assert!(output.contains("Related Topics"));
        assert!(output.contains("Topic 1 description"));
        assert!(output.contains("Topic 2 description"));
    }
}
