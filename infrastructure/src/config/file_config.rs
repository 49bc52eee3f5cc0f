//! File configuration model (`gauge.toml`)
//!
//! All settings are optional in the file; defaults reproduce the built-in
//! evaluation: three default cases, enforcing gate with no rules, judge
//! enabled, report written to `evaluation_report.md`.

use gauge_application::GateMode;
use gauge_domain::EvaluationCase;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: ProviderConfig,
    pub gate: GateConfig,
    pub judge: JudgeConfig,
    pub report: ReportConfig,
    pub cases: Vec<CaseConfig>,
}

/// Model provider settings for the agent invoker
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// AWS region for the Bedrock runtime
    pub region: String,
    /// Bedrock model identifier
    pub model_id: String,
    /// Maximum tokens per model response
    pub max_tokens: u32,
    /// Reasoning-step limit for one invocation (tool-use round trips)
    pub max_steps: u32,
    /// Optional per-case invocation timeout in seconds (0 = none)
    pub case_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            region: "us-east-1".to_string(),
            model_id: "anthropic.claude-3-5-sonnet-20240620-v1:0".to_string(),
            max_tokens: 2048,
            max_steps: 8,
            case_timeout_secs: 0,
        }
    }
}

impl ProviderConfig {
    /// The token limit as the Bedrock SDK expects it. The Converse API
    /// takes `i32`, so a configured value above `i32::MAX` is a config
    /// error rather than a silent truncation.
    pub fn max_tokens_i32(&self) -> Result<i32, String> {
        i32::try_from(self.max_tokens)
            .map_err(|_| format!("provider.max_tokens is out of range: {}", self.max_tokens))
    }
}

/// Policy gate settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    /// `enforcing` or `advisory`
    pub mode: GateMode,
    /// Rules evaluated in order; first match wins
    pub rules: Vec<GateRuleConfig>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            mode: GateMode::Enforcing,
            rules: Vec::new(),
        }
    }
}

/// One policy rule: a regex pattern plus the action to take on match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateRuleConfig {
    /// Regex matched case-insensitively against the raw input
    pub pattern: String,
    /// `block` or `rewrite`
    pub action: GateRuleAction,
    /// Block reason, surfaced in the decision and the report
    #[serde(default)]
    pub reason: Option<String>,
    /// Replacement text for `rewrite` rules
    #[serde(default)]
    pub replacement: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateRuleAction {
    Block,
    Rewrite,
}

/// Correctness judge settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JudgeConfig {
    pub enabled: bool,
    /// Bedrock model identifier for the grader; empty = same as provider
    pub model_id: String,
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model_id: String::new(),
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Destination path, overwritten entirely on each run
    pub path: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            path: "evaluation_report.md".to_string(),
        }
    }
}

/// One evaluation case as configured in `[[cases]]`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseConfig {
    pub input: String,
    pub reference: String,
    #[serde(default)]
    pub expected_tools: Vec<String>,
}

impl From<CaseConfig> for EvaluationCase {
    fn from(config: CaseConfig) -> Self {
        EvaluationCase::new(config.input, config.reference).with_expected_tools(config.expected_tools)
    }
}

impl FileConfig {
    /// The evaluation cases to run: configured cases, or the built-in
    /// defaults when the file declares none.
    pub fn evaluation_cases(&self) -> Vec<EvaluationCase> {
        if self.cases.is_empty() {
            return Self::default_cases();
        }
        self.cases.iter().cloned().map(Into::into).collect()
    }

    /// The built-in case list: arithmetic, encyclopedia, arithmetic.
    pub fn default_cases() -> Vec<EvaluationCase> {
        vec![
            EvaluationCase::new("What is 10 + 5?", "15").with_expected_tools(["add_numbers"]),
            EvaluationCase::new(
                "Who is Mahendra Singh Dhoni?",
                "Mahendra Singh Dhoni is an Indian former international cricketer",
            )
            .with_expected_tools(["wiki_lookup"]),
            EvaluationCase::new("What is 42 + 58?", "100").with_expected_tools(["add_numbers"]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.report.path, "evaluation_report.md");
        assert_eq!(config.gate.mode, GateMode::Enforcing);
        assert!(config.judge.enabled);
        assert!(config.cases.is_empty());
    }

    #[test]
    fn test_default_cases_used_when_none_configured() {
        let config = FileConfig::default();
        let cases = config.evaluation_cases();
        assert_eq!(cases.len(), 3);
        assert_eq!(cases[0].expected_tools, vec!["add_numbers"]);
        assert_eq!(cases[1].expected_tools, vec!["wiki_lookup"]);
    }

    #[test]
    fn test_max_tokens_conversion() {
        let config = ProviderConfig::default();
        assert_eq!(config.max_tokens_i32(), Ok(2048));

        let oversized = ProviderConfig {
            max_tokens: u32::MAX,
            ..ProviderConfig::default()
        };
        assert!(oversized.max_tokens_i32().is_err());
    }

    #[test]
    fn test_parse_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [provider]
            region = "eu-west-1"
            max_steps = 4

            [gate]
            mode = "advisory"

            [[gate.rules]]
            pattern = "(?i)password"
            action = "block"
            reason = "credential request"

            [[cases]]
            input = "What is 1 + 1?"
            reference = "2"
            expected_tools = ["add_numbers"]
            "#,
        )
        .unwrap();

        assert_eq!(config.provider.region, "eu-west-1");
        assert_eq!(config.provider.max_steps, 4);
        assert_eq!(config.gate.mode, GateMode::Advisory);
        assert_eq!(config.gate.rules.len(), 1);
        assert_eq!(config.gate.rules[0].action, GateRuleAction::Block);

        let cases = config.evaluation_cases();
        assert_eq!(cases.len(), 1);
        assert_eq!(cases[0].reference, "2");
    }
}
