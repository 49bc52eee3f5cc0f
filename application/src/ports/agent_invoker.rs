//! Agent Invoker port
//!
//! Defines the interface to the tool-using reasoning engine. The invoker
//! owns its internal reasoning-step limit; this layer depends only on the
//! shape of its return value: final text plus the ordered tool-step log.

use async_trait::async_trait;
use gauge_domain::{InvocationResult, ToolStep};
use thiserror::Error;

/// Errors that can occur during agent invocation
#[derive(Error, Debug)]
pub enum InvokerError {
    /// Provider or tool execution error. Carries whatever partial step log
    /// was recorded before the failure, so trajectory data is not lost.
    #[error("Agent invocation failed: {message}")]
    Failed {
        message: String,
        partial_steps: Vec<ToolStep>,
    },
}

impl InvokerError {
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed {
            message: message.into(),
            partial_steps: Vec::new(),
        }
    }

    pub fn failed_with_steps(message: impl Into<String>, partial_steps: Vec<ToolStep>) -> Self {
        Self::Failed {
            message: message.into(),
            partial_steps,
        }
    }
}

/// Port for running one agent invocation to completion
#[async_trait]
pub trait AgentInvokerPort: Send + Sync {
    /// Run the reasoning loop for one input and return the final answer
    /// plus the ordered tool-step log.
    async fn invoke(&self, input: &str) -> Result<InvocationResult, InvokerError>;
}
