//! LLM provider adapters (`bedrock` feature)
//!
//! Currently a single provider: AWS Bedrock via the Converse API. The
//! [`bedrock`] module hosts the agent invoker and the type conversions
//! between SDK and domain types; the correctness judge in `crate::judge`
//! shares the same client.

pub mod bedrock;

pub use bedrock::BedrockAgentInvoker;
