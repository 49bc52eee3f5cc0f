//! Policy Gate port
//!
//! Defines the interface for evaluating a raw user input against the
//! policy rule layer before any tool-using execution is permitted.

use async_trait::async_trait;
use gauge_domain::GateDecision;
use thiserror::Error;

/// Errors that can occur during policy gate operations
#[derive(Error, Debug)]
pub enum PolicyGateError {
    /// The gate is unreachable or failed to evaluate. Fatal to the run:
    /// execution must not silently proceed without policy processing.
    #[error("Policy gate unavailable: {0}")]
    Unavailable(String),
}

/// Gate for policy-rule evaluation of user inputs
///
/// The gate inspects the input and returns a structured decision. Side
/// effects (logging the decision) are permitted; whether the decision is
/// enforced or advisory is decided by the evaluation run's configuration,
/// not by the gate.
#[async_trait]
pub trait PolicyGatePort: Send + Sync {
    /// Evaluate a user input against the rule set.
    async fn evaluate(&self, input: &str) -> Result<GateDecision, PolicyGateError>;
}
