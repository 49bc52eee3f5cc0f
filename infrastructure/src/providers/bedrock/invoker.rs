//! Bedrock agent invoker
//!
//! Implements `AgentInvokerPort` on top of the Converse API. One invocation
//! runs a tool-use loop: while the model stops for `ToolUse`, the requested
//! tools are executed through the `ToolExecutorPort` and their results sent
//! back; an `EndTurn` stop ends the loop with the final answer. Every tool
//! execution is recorded as a [`ToolStep`] in order, and a failure carries
//! the partial step log out through the error.

use super::types;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types as bedrock;
use gauge_application::{AgentInvokerPort, InvokerError, ToolExecutorPort};
use gauge_domain::{InvocationResult, LlmResponse, StopReason, ToolStep};
use std::sync::Arc;
use tracing::debug;

const SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Use the available tools when they help answer the question, \
     and answer concisely.";

pub struct BedrockAgentInvoker<T: ToolExecutorPort> {
    client: Arc<BedrockClient>,
    tools: Arc<T>,
    model_id: String,
    max_tokens: i32,
    /// Upper bound on reasoning rounds (Converse calls) per invocation.
    max_steps: usize,
}

impl<T: ToolExecutorPort> BedrockAgentInvoker<T> {
    pub fn new(
        client: Arc<BedrockClient>,
        tools: Arc<T>,
        model_id: impl Into<String>,
        max_tokens: i32,
        max_steps: usize,
    ) -> Self {
        Self {
            client,
            tools,
            model_id: model_id.into(),
            max_tokens,
            max_steps,
        }
    }

    /// Build the tool configuration from the executor's tool spec.
    ///
    /// Returns `None` when no tools are registered, since the Converse API
    /// rejects an empty tool list.
    fn tool_config(&self) -> Result<Option<bedrock::ToolConfiguration>, String> {
        let bedrock_tools: Vec<bedrock::Tool> = self
            .tools
            .tool_spec()
            .json_schemas()
            .iter()
            .filter_map(types::convert_tool_schema)
            .collect();

        if bedrock_tools.is_empty() {
            return Ok(None);
        }

        bedrock::ToolConfiguration::builder()
            .set_tools(Some(bedrock_tools))
            .build()
            .map(Some)
            .map_err(|e| format!("Failed to build tool config: {}", e))
    }

    /// Execute a Converse API call with the full message history.
    async fn converse(
        &self,
        messages: &[bedrock::Message],
        tool_config: Option<&bedrock::ToolConfiguration>,
    ) -> Result<LlmResponse, String> {
        let mut request = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(bedrock::SystemContentBlock::Text(SYSTEM_PROMPT.to_string()))
            .set_messages(Some(messages.to_vec()))
            .inference_config(
                bedrock::InferenceConfiguration::builder()
                    .max_tokens(self.max_tokens)
                    .build(),
            );

        if let Some(tc) = tool_config {
            request = request.tool_config(tc.clone());
        }

        debug!(
            model = %self.model_id,
            messages = messages.len(),
            "Calling Bedrock Converse API"
        );

        let response = request
            .send()
            .await
            .map_err(|e| types::convert_converse_error(&e))?;

        let stop_reason = response.stop_reason();
        let output = response
            .output()
            .ok_or_else(|| "No output in Bedrock response".to_string())?;

        Ok(types::convert_converse_output(
            output,
            stop_reason,
            &self.model_id,
        ))
    }

    /// Execute every tool call in the response, appending to the step log,
    /// and return the tool-result content blocks for the next turn.
    async fn execute_tool_calls(
        &self,
        response: &LlmResponse,
        steps: &mut Vec<ToolStep>,
    ) -> Result<Vec<bedrock::ContentBlock>, String> {
        let mut result_blocks = Vec::new();

        for call in response.tool_calls() {
            debug!(tool = %call.tool_name, "Executing tool");
            let result = self.tools.execute(&call).await;

            steps.push(ToolStep::new(
                &call.tool_name,
                call.arguments_json(),
                result.feedback_text(),
            ));

            let tool_use_id = call.native_id.clone().unwrap_or_default();
            result_blocks.push(types::convert_tool_result(&tool_use_id, &result)?);
        }

        Ok(result_blocks)
    }

    fn build_message(
        role: bedrock::ConversationRole,
        content: Vec<bedrock::ContentBlock>,
    ) -> Result<bedrock::Message, String> {
        bedrock::Message::builder()
            .role(role)
            .set_content(Some(content))
            .build()
            .map_err(|e| format!("Failed to build message: {}", e))
    }

    /// Convert an LlmResponse back into Bedrock content blocks so the
    /// assistant turn can be replayed in the stateless history.
    fn response_to_content_blocks(
        response: &LlmResponse,
    ) -> Result<Vec<bedrock::ContentBlock>, String> {
        let mut blocks = Vec::new();

        for block in &response.content {
            match block {
                gauge_domain::ContentBlock::Text(text) => {
                    blocks.push(bedrock::ContentBlock::Text(text.clone()));
                }
                gauge_domain::ContentBlock::ToolUse { id, name, input } => {
                    let tool_use = bedrock::ToolUseBlock::builder()
                        .tool_use_id(id)
                        .name(name)
                        .input(types::json_to_document(&serde_json::json!(input)))
                        .build()
                        .map_err(|e| format!("Failed to build tool use block: {}", e))?;
                    blocks.push(bedrock::ContentBlock::ToolUse(tool_use));
                }
            }
        }

        Ok(blocks)
    }
}

#[async_trait]
impl<T: ToolExecutorPort> AgentInvokerPort for BedrockAgentInvoker<T> {
    async fn invoke(&self, input: &str) -> Result<InvocationResult, InvokerError> {
        let mut steps: Vec<ToolStep> = Vec::new();

        let tool_config = self
            .tool_config()
            .map_err(InvokerError::failed)?;

        let mut messages = vec![
            Self::build_message(
                bedrock::ConversationRole::User,
                vec![bedrock::ContentBlock::Text(input.to_string())],
            )
            .map_err(InvokerError::failed)?,
        ];

        for _round in 0..self.max_steps {
            let response = match self.converse(&messages, tool_config.as_ref()).await {
                Ok(r) => r,
                Err(e) => return Err(InvokerError::failed_with_steps(e, steps)),
            };

            let assistant_blocks = match Self::response_to_content_blocks(&response) {
                Ok(b) => b,
                Err(e) => return Err(InvokerError::failed_with_steps(e, steps)),
            };
            if !assistant_blocks.is_empty() {
                let assistant_msg =
                    Self::build_message(bedrock::ConversationRole::Assistant, assistant_blocks)
                        .map_err(|e| {
                            InvokerError::failed_with_steps(e, std::mem::take(&mut steps))
                        })?;
                messages.push(assistant_msg);
            }

            if response.stop_reason == Some(StopReason::ToolUse) && response.has_tool_calls() {
                let result_blocks = match self.execute_tool_calls(&response, &mut steps).await {
                    Ok(b) => b,
                    Err(e) => return Err(InvokerError::failed_with_steps(e, steps)),
                };
                let results_msg =
                    Self::build_message(bedrock::ConversationRole::User, result_blocks).map_err(
                        |e| InvokerError::failed_with_steps(e, std::mem::take(&mut steps)),
                    )?;
                messages.push(results_msg);
                continue;
            }

            return Ok(InvocationResult::new(response.text_content(), steps));
        }

        Err(InvokerError::failed_with_steps(
            format!("Reasoning loop exceeded {} rounds", self.max_steps),
            steps,
        ))
    }
}
