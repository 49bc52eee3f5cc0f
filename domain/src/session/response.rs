//! Structured LLM response types.
//!
//! Tool-use-capable provider APIs return responses as an array of content
//! blocks mixing text and tool use requests. The agent invoker drives its
//! reasoning loop off [`LlmResponse::stop_reason`]: while the model stops
//! for `ToolUse`, the requested tools are executed and their results sent
//! back; an `EndTurn` stop ends the loop with the final answer.

use crate::tool::entities::ToolCall;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single block of content within an LLM response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContentBlock {
    /// A text content block from the model.
    Text(String),

    /// A tool use request from the model.
    ToolUse {
        /// API-assigned ID for correlating with tool results.
        id: String,
        /// Tool name, enforced by the API against the provided definitions.
        name: String,
        /// Structured arguments validated against the tool's schema.
        input: HashMap<String, serde_json::Value>,
    },
}

impl ContentBlock {
    /// Returns the text content if this is a `Text` block.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentBlock::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Natural end of response — the model is done.
    EndTurn,
    /// The model wants to call tools — execute them and return results.
    ToolUse,
    /// Hit the token limit — response may be truncated.
    MaxTokens,
    /// Provider-specific stop reason.
    Other(String),
}

/// A structured response from an LLM, supporting both text and tool use.
#[derive(Debug, Clone)]
pub struct LlmResponse {
    /// Content blocks in the response (text and/or tool use).
    pub content: Vec<ContentBlock>,
    /// Why the model stopped generating.
    pub stop_reason: Option<StopReason>,
    /// Model identifier (if returned by the API).
    pub model: Option<String>,
}

impl LlmResponse {
    /// Create a text-only response.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text(text.into())],
            stop_reason: Some(StopReason::EndTurn),
            model: None,
        }
    }

    /// Concatenate all `Text` content blocks into a single string.
    pub fn text_content(&self) -> String {
        self.content
            .iter()
            .filter_map(|b| b.as_text())
            .collect::<Vec<_>>()
            .join("")
    }

    /// Extract all `ToolUse` content blocks as `Vec<ToolCall>`.
    pub fn tool_calls(&self) -> Vec<ToolCall> {
        self.content
            .iter()
            .filter_map(|b| match b {
                ContentBlock::ToolUse { id, name, input } => {
                    Some(ToolCall::from_native(id, name, input.clone()))
                }
                _ => None,
            })
            .collect()
    }

    /// Returns `true` if the response contains any tool use requests.
    pub fn has_tool_calls(&self) -> bool {
        self.content
            .iter()
            .any(|b| matches!(b, ContentBlock::ToolUse { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_text_creates_text_only_response() {
        let response = LlmResponse::from_text("100");
        assert_eq!(response.text_content(), "100");
        assert!(!response.has_tool_calls());
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
    }

    #[test]
    fn tool_calls_extraction() {
        let response = LlmResponse {
            content: vec![
                ContentBlock::Text("Let me add those.".to_string()),
                ContentBlock::ToolUse {
                    id: "toolu_1".to_string(),
                    name: "add_numbers".to_string(),
                    input: [
                        ("a".to_string(), serde_json::json!(42)),
                        ("b".to_string(), serde_json::json!(58)),
                    ]
                    .into_iter()
                    .collect(),
                },
            ],
            stop_reason: Some(StopReason::ToolUse),
            model: None,
        };

        assert!(response.has_tool_calls());
        assert_eq!(response.text_content(), "Let me add those.");

        let calls = response.tool_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].tool_name, "add_numbers");
        assert_eq!(calls[0].native_id, Some("toolu_1".to_string()));
        assert_eq!(calls[0].get_i64("a"), Some(42));
    }

    #[test]
    fn empty_response() {
        let response = LlmResponse {
            content: vec![],
            stop_reason: None,
            model: None,
        };

        assert_eq!(response.text_content(), "");
        assert!(response.tool_calls().is_empty());
    }
}
