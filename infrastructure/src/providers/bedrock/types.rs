//! Type conversions between the AWS Bedrock SDK and domain types
//!
//! Converse API responses become domain [`LlmResponse`] values; domain tool
//! schemas and tool results become Bedrock request types. Conversion
//! failures surface as `String` messages and are wrapped by the caller.

use aws_sdk_bedrockruntime::types as bedrock;
use aws_smithy_types::Document;
use gauge_domain::tool::value_objects::ToolResult;
use gauge_domain::{ContentBlock, LlmResponse, StopReason};
use std::collections::HashMap;

// ─── Bedrock → Domain ────────────────────────────────────────────

pub fn convert_stop_reason(reason: &bedrock::StopReason) -> StopReason {
    match reason {
        bedrock::StopReason::EndTurn => StopReason::EndTurn,
        bedrock::StopReason::ToolUse => StopReason::ToolUse,
        bedrock::StopReason::MaxTokens => StopReason::MaxTokens,
        other => StopReason::Other(format!("{:?}", other)),
    }
}

/// Convert a single Bedrock content block to a domain ContentBlock.
///
/// Returns `None` for block types the harness does not use (images,
/// guard content, documents).
pub fn convert_content_block(block: &bedrock::ContentBlock) -> Option<ContentBlock> {
    match block {
        bedrock::ContentBlock::Text(text) => Some(ContentBlock::Text(text.clone())),
        bedrock::ContentBlock::ToolUse(tool_use) => {
            let input_map = match document_to_json(tool_use.input()) {
                serde_json::Value::Object(map) => map.into_iter().collect::<HashMap<_, _>>(),
                _ => HashMap::new(),
            };
            Some(ContentBlock::ToolUse {
                id: tool_use.tool_use_id().to_string(),
                name: tool_use.name().to_string(),
                input: input_map,
            })
        }
        _ => None,
    }
}

/// Convert a Bedrock ConverseOutput to a domain LlmResponse.
pub fn convert_converse_output(
    output: &bedrock::ConverseOutput,
    stop_reason: &bedrock::StopReason,
    model_id: &str,
) -> LlmResponse {
    let content = match output {
        bedrock::ConverseOutput::Message(message) => message
            .content()
            .iter()
            .filter_map(convert_content_block)
            .collect(),
        _ => return LlmResponse::from_text(""),
    };

    LlmResponse {
        content,
        stop_reason: Some(convert_stop_reason(stop_reason)),
        model: Some(model_id.to_string()),
    }
}

// ─── Domain → Bedrock ────────────────────────────────────────────

/// Convert a domain ToolResult into a Bedrock ContentBlock::ToolResult.
///
/// `tool_use_id` is the API-assigned ID from the tool-use block that
/// requested this execution.
pub fn convert_tool_result(
    tool_use_id: &str,
    result: &ToolResult,
) -> Result<bedrock::ContentBlock, String> {
    let status = if result.is_success() {
        bedrock::ToolResultStatus::Success
    } else {
        bedrock::ToolResultStatus::Error
    };

    let block = bedrock::ToolResultBlock::builder()
        .tool_use_id(tool_use_id)
        .status(status)
        .content(bedrock::ToolResultContentBlock::Text(
            result.feedback_text(),
        ))
        .build()
        .map_err(|e| format!("Failed to build tool result block: {}", e))?;

    Ok(bedrock::ContentBlock::ToolResult(block))
}

/// Convert a JSON tool schema (from `ToolSpec::json_schemas()`) to a
/// Bedrock Tool::ToolSpec.
pub fn convert_tool_schema(schema: &serde_json::Value) -> Option<bedrock::Tool> {
    let name = schema.get("name")?.as_str()?;
    let description = schema.get("description").and_then(|d| d.as_str());

    let input_schema_json = schema.get("input_schema").cloned().unwrap_or_else(|| {
        serde_json::json!({
            "type": "object",
            "properties": {},
        })
    });

    let mut builder = bedrock::ToolSpecification::builder()
        .name(name)
        .input_schema(bedrock::ToolInputSchema::Json(json_to_document(
            &input_schema_json,
        )));
    if let Some(desc) = description {
        builder = builder.description(desc);
    }

    builder.build().ok().map(bedrock::Tool::ToolSpec)
}

// ─── JSON ↔ Document helpers ─────────────────────────────────────

pub fn json_to_document(value: &serde_json::Value) -> Document {
    match value {
        serde_json::Value::Null => Document::Null,
        serde_json::Value::Bool(b) => Document::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Document::Number(aws_smithy_types::Number::NegInt(i))
            } else if let Some(f) = n.as_f64() {
                Document::Number(aws_smithy_types::Number::Float(f))
            } else {
                Document::Null
            }
        }
        serde_json::Value::String(s) => Document::String(s.clone()),
        serde_json::Value::Array(arr) => {
            Document::Array(arr.iter().map(json_to_document).collect())
        }
        serde_json::Value::Object(map) => Document::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), json_to_document(v)))
                .collect(),
        ),
    }
}

pub fn document_to_json(doc: &Document) -> serde_json::Value {
    match doc {
        Document::Null => serde_json::Value::Null,
        Document::Bool(b) => serde_json::Value::Bool(*b),
        Document::Number(n) => match n {
            aws_smithy_types::Number::PosInt(i) => serde_json::json!(*i),
            aws_smithy_types::Number::NegInt(i) => serde_json::json!(*i),
            aws_smithy_types::Number::Float(f) => serde_json::Value::Number(
                serde_json::Number::from_f64(*f).unwrap_or_else(|| serde_json::Number::from(0)),
            ),
        },
        Document::String(s) => serde_json::Value::String(s.clone()),
        Document::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(document_to_json).collect())
        }
        Document::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), document_to_json(v)))
                .collect(),
        ),
    }
}

/// Render a Bedrock SDK error as a single message string.
pub fn convert_converse_error(
    err: &aws_sdk_bedrockruntime::error::SdkError<
        aws_sdk_bedrockruntime::operation::converse::ConverseError,
    >,
) -> String {
    use aws_sdk_bedrockruntime::operation::converse::ConverseError;

    match err {
        aws_sdk_bedrockruntime::error::SdkError::ServiceError(service_err) => {
            match service_err.err() {
                ConverseError::ThrottlingException(e) => format!("Bedrock throttled: {}", e),
                ConverseError::ModelNotReadyException(e) => {
                    format!("Bedrock model not ready: {}", e)
                }
                ConverseError::ValidationException(e) => {
                    format!("Bedrock validation error: {}", e)
                }
                ConverseError::ModelTimeoutException(_) => "Bedrock model timeout".to_string(),
                other => format!("Bedrock error: {:?}", other),
            }
        }
        other => format!("Bedrock SDK error: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_stop_reason() {
        assert_eq!(
            convert_stop_reason(&bedrock::StopReason::EndTurn),
            StopReason::EndTurn
        );
        assert_eq!(
            convert_stop_reason(&bedrock::StopReason::ToolUse),
            StopReason::ToolUse
        );
        assert_eq!(
            convert_stop_reason(&bedrock::StopReason::MaxTokens),
            StopReason::MaxTokens
        );
    }

    #[test]
    fn test_convert_text_content_block() {
        let block = bedrock::ContentBlock::Text("115".to_string());
        let result = convert_content_block(&block).unwrap();
        assert!(matches!(result, ContentBlock::Text(ref t) if t == "115"));
    }

    #[test]
    fn test_json_document_roundtrip() {
        let original = serde_json::json!({
            "query": "MS Dhoni",
            "count": 42,
            "nested": { "flag": true },
            "items": [1, 2, 3]
        });
        let doc = json_to_document(&original);
        assert_eq!(document_to_json(&doc), original);
    }

    #[test]
    fn test_convert_tool_result_success() {
        let result = ToolResult::success("add_numbers", "100");
        let block = convert_tool_result("toolu_1", &result).unwrap();
        assert!(matches!(block, bedrock::ContentBlock::ToolResult(_)));
    }

    #[test]
    fn test_convert_tool_schema() {
        let schema = serde_json::json!({
            "name": "add_numbers",
            "description": "Add two numbers",
            "input_schema": {
                "type": "object",
                "properties": {
                    "a": { "type": "integer", "description": "First addend" },
                    "b": { "type": "integer", "description": "Second addend" }
                },
                "required": ["a", "b"]
            }
        });
        assert!(convert_tool_schema(&schema).is_some());
    }

    #[test]
    fn test_convert_tool_schema_missing_name() {
        let schema = serde_json::json!({ "description": "No name" });
        assert!(convert_tool_schema(&schema).is_none());
    }

    #[test]
    fn test_default_tool_spec_converts_to_request_shape() {
        let spec = crate::tools::default_tool_spec();
        let schemas = spec.json_schemas();
        assert!(!schemas.is_empty());

        let tools: Vec<bedrock::Tool> = schemas
            .iter()
            .filter_map(convert_tool_schema)
            .collect();
        assert_eq!(tools.len(), schemas.len());

        let has_add_numbers = tools.iter().any(|t| {
            matches!(t, bedrock::Tool::ToolSpec(ts) if ts.name() == "add_numbers")
        });
        assert!(has_add_numbers);
    }
}
