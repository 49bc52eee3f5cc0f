//! Evaluation case entity

use serde::{Deserialize, Serialize};

/// One test case for the evaluation run.
///
/// Cases are immutable and defined statically before a run, either as
/// built-in defaults or from the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationCase {
    /// The user input sent through the gated agent.
    pub input: String,
    /// Reference answer the agent's output is judged against.
    pub reference: String,
    /// Tool names the agent is expected to invoke, in expected order.
    #[serde(default)]
    pub expected_tools: Vec<String>,
}

impl EvaluationCase {
    pub fn new(input: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reference: reference.into(),
            expected_tools: Vec::new(),
        }
    }

    pub fn with_expected_tools(
        mut self,
        tools: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.expected_tools = tools.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this case expects the agent to answer without tools.
    pub fn expects_no_tools(&self) -> bool {
        self.expected_tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_builder() {
        let case = EvaluationCase::new("What is 42 + 58?", "100")
            .with_expected_tools(["add_numbers"]);

        assert_eq!(case.input, "What is 42 + 58?");
        assert_eq!(case.reference, "100");
        assert_eq!(case.expected_tools, vec!["add_numbers"]);
        assert!(!case.expects_no_tools());
    }

    #[test]
    fn test_case_without_tools() {
        let case = EvaluationCase::new("Hello", "Hi");
        assert!(case.expects_no_tools());
    }
}
