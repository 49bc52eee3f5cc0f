//! AWS Bedrock provider
//!
//! Wraps the Bedrock Converse API. The API is stateless, so the invoker
//! carries the full message history on every call.

pub mod invoker;
pub mod types;

pub use invoker::BedrockAgentInvoker;

use aws_sdk_bedrockruntime::Client as BedrockClient;

/// Initialize AWS credentials and create a Bedrock Runtime client.
///
/// Credentials come from the standard AWS chain (environment, profile,
/// instance metadata).
pub async fn connect(region: &str) -> BedrockClient {
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()))
        .load()
        .await;

    BedrockClient::new(&aws_config)
}
