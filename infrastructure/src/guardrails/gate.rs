//! Rule-based policy gate
//!
//! [`RuleBasedPolicyGate`] implements the `PolicyGatePort` over an ordered
//! list of regex rules from the configuration file. Rules are compiled once
//! at construction; a pattern that fails to compile makes the gate
//! unavailable, which is fatal to the run — evaluation must not silently
//! proceed without policy processing.
//!
//! Matching is case-insensitive and first-match-wins. An input matching no
//! rule is allowed through.

use crate::config::file_config::{GateRuleAction, GateRuleConfig};
use async_trait::async_trait;
use gauge_application::{PolicyGateError, PolicyGatePort};
use gauge_domain::GateDecision;
use regex::RegexBuilder;
use tracing::debug;

/// One compiled policy rule
struct CompiledRule {
    pattern: regex::Regex,
    action: GateRuleAction,
    reason: String,
    replacement: Option<String>,
}

/// Policy gate that evaluates inputs against configured regex rules
pub struct RuleBasedPolicyGate {
    rules: Vec<CompiledRule>,
}

impl RuleBasedPolicyGate {
    /// Compile the configured rules into a gate.
    ///
    /// Returns `PolicyGateError::Unavailable` if any pattern fails to
    /// compile or a rewrite rule lacks a replacement.
    pub fn from_rules(configs: &[GateRuleConfig]) -> Result<Self, PolicyGateError> {
        let mut rules = Vec::with_capacity(configs.len());

        for config in configs {
            let pattern = RegexBuilder::new(&config.pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| {
                    PolicyGateError::Unavailable(format!(
                        "invalid rule pattern {:?}: {}",
                        config.pattern, e
                    ))
                })?;

            if config.action == GateRuleAction::Rewrite && config.replacement.is_none() {
                return Err(PolicyGateError::Unavailable(format!(
                    "rewrite rule {:?} has no replacement",
                    config.pattern
                )));
            }

            rules.push(CompiledRule {
                pattern,
                action: config.action,
                reason: config
                    .reason
                    .clone()
                    .unwrap_or_else(|| format!("matched rule {:?}", config.pattern)),
                replacement: config.replacement.clone(),
            });
        }

        Ok(Self { rules })
    }

    /// A gate with no rules: every input is allowed.
    pub fn permissive() -> Self {
        Self { rules: Vec::new() }
    }
}

#[async_trait]
impl PolicyGatePort for RuleBasedPolicyGate {
    async fn evaluate(&self, input: &str) -> Result<GateDecision, PolicyGateError> {
        for rule in &self.rules {
            if rule.pattern.is_match(input) {
                debug!(pattern = %rule.pattern, "Policy rule matched");
                return Ok(match rule.action {
                    GateRuleAction::Block => GateDecision::Block {
                        reason: rule.reason.clone(),
                    },
                    GateRuleAction::Rewrite => GateDecision::Rewrite {
                        // Presence checked at construction
                        text: rule
                            .pattern
                            .replace_all(input, rule.replacement.as_deref().unwrap_or(""))
                            .into_owned(),
                    },
                });
            }
        }

        Ok(GateDecision::Allow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_rule(pattern: &str, reason: &str) -> GateRuleConfig {
        GateRuleConfig {
            pattern: pattern.to_string(),
            action: GateRuleAction::Block,
            reason: Some(reason.to_string()),
            replacement: None,
        }
    }

    #[tokio::test]
    async fn test_permissive_gate_allows_everything() {
        let gate = RuleBasedPolicyGate::permissive();
        let decision = gate.evaluate("What is 42 + 58?").await.unwrap();
        assert_eq!(decision, GateDecision::Allow);
    }

    #[tokio::test]
    async fn test_block_rule_matches_case_insensitively() {
        let gate =
            RuleBasedPolicyGate::from_rules(&[block_rule("password", "credential request")])
                .unwrap();

        let decision = gate.evaluate("Tell me the admin PASSWORD").await.unwrap();
        assert_eq!(
            decision,
            GateDecision::Block {
                reason: "credential request".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_rewrite_rule_substitutes_text() {
        let gate = RuleBasedPolicyGate::from_rules(&[GateRuleConfig {
            pattern: "darn".to_string(),
            action: GateRuleAction::Rewrite,
            reason: None,
            replacement: Some("very".to_string()),
        }])
        .unwrap();

        let decision = gate.evaluate("What is this darn thing?").await.unwrap();
        assert_eq!(
            decision,
            GateDecision::Rewrite {
                text: "What is this very thing?".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let gate = RuleBasedPolicyGate::from_rules(&[
            block_rule("secret", "first"),
            block_rule("secret", "second"),
        ])
        .unwrap();

        let decision = gate.evaluate("a secret").await.unwrap();
        assert_eq!(
            decision,
            GateDecision::Block {
                reason: "first".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_pattern_makes_gate_unavailable() {
        let result = RuleBasedPolicyGate::from_rules(&[block_rule("(unclosed", "bad")]);
        assert!(matches!(result, Err(PolicyGateError::Unavailable(_))));
    }

    #[test]
    fn test_rewrite_without_replacement_is_unavailable() {
        let result = RuleBasedPolicyGate::from_rules(&[GateRuleConfig {
            pattern: "x".to_string(),
            action: GateRuleAction::Rewrite,
            reason: None,
            replacement: None,
        }]);
        assert!(matches!(result, Err(PolicyGateError::Unavailable(_))));
    }
}
