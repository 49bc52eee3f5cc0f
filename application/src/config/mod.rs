//! Application configuration
//!
//! [`EvaluationParams`] is constructed once at process start from the file
//! configuration and passed by reference into the evaluation run. There are
//! no module-level singletons and no ambient initialization.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How the evaluation run acts on policy gate decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateMode {
    /// Block decisions stop the case; rewrite decisions are applied.
    Enforcing,
    /// Decisions are logged only; the agent is always invoked with the
    /// original input.
    Advisory,
}

impl Default for GateMode {
    fn default() -> Self {
        GateMode::Enforcing
    }
}

/// Parameters governing one evaluation run.
#[derive(Debug, Clone)]
pub struct EvaluationParams {
    /// How gate decisions are acted on.
    pub gate_mode: GateMode,
    /// Whether to call the correctness judge at all.
    pub judge_enabled: bool,
    /// Optional per-case invocation timeout. A hung external call is
    /// converted into a recorded per-case failure instead of hanging the
    /// whole run.
    pub case_timeout: Option<Duration>,
}

impl Default for EvaluationParams {
    fn default() -> Self {
        Self {
            gate_mode: GateMode::Enforcing,
            judge_enabled: true,
            case_timeout: None,
        }
    }
}

impl EvaluationParams {
    pub fn with_gate_mode(mut self, mode: GateMode) -> Self {
        self.gate_mode = mode;
        self
    }

    pub fn with_judge_enabled(mut self, enabled: bool) -> Self {
        self.judge_enabled = enabled;
        self
    }

    pub fn with_case_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.case_timeout = timeout;
        self
    }
}
