//! Evaluation result value object

use super::case::EvaluationCase;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The scored outcome of one evaluation case.
///
/// Created once per case by the evaluation run and consumed only by the
/// report writer; never mutated afterward. Failure is represented as an
/// explicit marker (`failure: Some(..)`) rather than a missing result, so
/// the report always reflects every requested case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// The case input as sent to the gate.
    pub input: String,
    /// Final agent answer; `None` when the invocation failed or was blocked.
    pub output: Option<String>,
    /// Reference answer from the case.
    pub reference: String,
    /// Correctness score from the judge; `None` when judgment failed or
    /// was skipped.
    pub correctness: Option<f64>,
    /// Wall-clock duration of the agent invocation (not the judgment).
    pub latency: Duration,
    /// Tool names the case expected.
    pub expected_tools: Vec<String>,
    /// Tool names actually invoked, in execution order.
    pub actual_tools: Vec<String>,
    /// Trajectory match score in `[0, 1]`.
    pub trajectory_score: f64,
    /// Failure marker for blocked or failed invocations.
    pub failure: Option<String>,
}

impl EvaluationResult {
    /// A result for a case whose invocation completed.
    pub fn completed(
        case: &EvaluationCase,
        output: impl Into<String>,
        correctness: Option<f64>,
        latency: Duration,
        actual_tools: Vec<String>,
        trajectory_score: f64,
    ) -> Self {
        Self {
            input: case.input.clone(),
            output: Some(output.into()),
            reference: case.reference.clone(),
            correctness,
            latency,
            expected_tools: case.expected_tools.clone(),
            actual_tools,
            trajectory_score,
            failure: None,
        }
    }

    /// A result for a case whose invocation failed or was blocked.
    ///
    /// `actual_tools` carries whatever partial step log was recorded before
    /// the failure; the trajectory is still scored against it so the report
    /// keeps the case's trajectory data.
    pub fn failed(
        case: &EvaluationCase,
        reason: impl Into<String>,
        latency: Duration,
        actual_tools: Vec<String>,
        trajectory_score: f64,
    ) -> Self {
        Self {
            input: case.input.clone(),
            output: None,
            reference: case.reference.clone(),
            correctness: None,
            latency,
            expected_tools: case.expected_tools.clone(),
            actual_tools,
            trajectory_score,
            failure: Some(reason.into()),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.failure.is_some()
    }

    /// Latency in seconds, as reported.
    pub fn latency_seconds(&self) -> f64 {
        self.latency.as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case() -> EvaluationCase {
        EvaluationCase::new("What is 42 + 58?", "100").with_expected_tools(["add_numbers"])
    }

    #[test]
    fn test_completed_result() {
        let result = EvaluationResult::completed(
            &case(),
            "100",
            Some(1.0),
            Duration::from_millis(1500),
            vec!["add_numbers".to_string()],
            1.0,
        );

        assert!(!result.is_failure());
        assert_eq!(result.output.as_deref(), Some("100"));
        assert_eq!(result.correctness, Some(1.0));
        assert_eq!(result.latency_seconds(), 1.5);
    }

    #[test]
    fn test_failed_result_keeps_partial_trajectory() {
        let result = EvaluationResult::failed(
            &case(),
            "provider error",
            Duration::from_secs(2),
            vec!["add_numbers".to_string()],
            1.0,
        );

        assert!(result.is_failure());
        assert!(result.output.is_none());
        assert!(result.correctness.is_none());
        assert_eq!(result.actual_tools, vec!["add_numbers"]);
        assert_eq!(result.trajectory_score, 1.0);
    }
}
