//! Policy gate decisions
//!
//! [`GateDecision`] is the structured outcome of evaluating a raw user
//! input against the policy rule set before any tool-using execution is
//! permitted. How the decision is acted on (enforced vs. advisory) is an
//! application-layer concern.

use serde::{Deserialize, Serialize};

/// Decision returned by the policy gate for one user input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateDecision {
    /// Input passed all rules; proceed unchanged.
    Allow,
    /// Input matched a deny rule; execution should not proceed.
    Block {
        /// Human-readable reason, taken from the matching rule.
        reason: String,
    },
    /// Input matched a rewrite rule; proceed with the replacement text.
    Rewrite {
        /// The rewritten input text.
        text: String,
    },
}

impl GateDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, GateDecision::Block { .. })
    }

    /// The input text execution should proceed with, given the original.
    ///
    /// `Allow` and `Block` keep the original; `Rewrite` substitutes its
    /// replacement text.
    pub fn effective_input<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            GateDecision::Rewrite { text } => text,
            _ => original,
        }
    }
}

impl std::fmt::Display for GateDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateDecision::Allow => write!(f, "allow"),
            GateDecision::Block { reason } => write!(f, "block ({})", reason),
            GateDecision::Rewrite { .. } => write!(f, "rewrite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blocked() {
        assert!(!GateDecision::Allow.is_blocked());
        assert!(GateDecision::Block {
            reason: "denied".into()
        }
        .is_blocked());
    }

    #[test]
    fn test_effective_input_allow() {
        assert_eq!(GateDecision::Allow.effective_input("original"), "original");
    }

    #[test]
    fn test_effective_input_rewrite() {
        let decision = GateDecision::Rewrite {
            text: "sanitized".into(),
        };
        assert_eq!(decision.effective_input("original"), "sanitized");
    }
}
