//! Trajectory extraction and scoring.
//!
//! These functions are pure domain logic — no I/O, no session management,
//! just list processing over the recorded tool steps.
//!
//! # Functions
//!
//! | Function | Use Case |
//! |----------|----------|
//! | [`extract_trajectory`] | Ordered tool names actually invoked |
//! | [`trajectory_match_score`] | Expected-vs-actual match score in `[0, 1]` |

use crate::invocation::InvocationResult;

/// Extract the ordered list of tool names invoked during an agent run.
///
/// Steps without a usable tool identifier (blank name) are skipped, not
/// treated as errors. Deterministic for a given [`InvocationResult`].
pub fn extract_trajectory(result: &InvocationResult) -> Vec<String> {
    result
        .steps
        .iter()
        .filter(|step| step.has_tool_name())
        .map(|step| step.tool_name.clone())
        .collect()
}

/// Score how well the actual tool trajectory matches the expected one.
///
/// - If `expected` is empty, "no tool use" is a strict pass/fail: `1.0`
///   when `actual` is also empty, otherwise `0.0`.
/// - Otherwise the score is the fraction of `expected` entries that appear
///   anywhere in `actual`. Matching is per-element membership, not
///   positional: each entry of `expected` (duplicates included) scores when
///   it appears at least once in `actual`.
///
/// The result is always in `[0, 1]` and never panics for any combination
/// of empty and non-empty inputs.
pub fn trajectory_match_score(expected: &[String], actual: &[String]) -> f64 {
    if expected.is_empty() {
        return if actual.is_empty() { 1.0 } else { 0.0 };
    }

    let matched = expected
        .iter()
        .filter(|tool| actual.contains(tool))
        .count();

    matched as f64 / expected.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invocation::ToolStep;

    fn tools(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_trajectory_preserves_order() {
        let result = InvocationResult::new(
            "done",
            vec![
                ToolStep::new("wiki_lookup", serde_json::json!({"query": "Dhoni"}), "..."),
                ToolStep::new("add_numbers", serde_json::json!({"a": 1, "b": 2}), "3"),
            ],
        );

        assert_eq!(
            extract_trajectory(&result),
            tools(&["wiki_lookup", "add_numbers"])
        );
    }

    #[test]
    fn test_extract_trajectory_skips_malformed_steps() {
        let result = InvocationResult::new(
            "done",
            vec![
                ToolStep::new("wiki_lookup", serde_json::Value::Null, "..."),
                ToolStep::new("", serde_json::Value::Null, "no tool identifier"),
                ToolStep::new("add_numbers", serde_json::Value::Null, "3"),
            ],
        );

        assert_eq!(
            extract_trajectory(&result),
            tools(&["wiki_lookup", "add_numbers"])
        );
    }

    #[test]
    fn test_extract_trajectory_empty() {
        let result = InvocationResult::text_only("no tools needed");
        assert!(extract_trajectory(&result).is_empty());
    }

    #[test]
    fn test_score_empty_expected_empty_actual() {
        assert_eq!(trajectory_match_score(&[], &[]), 1.0);
    }

    #[test]
    fn test_score_empty_expected_nonempty_actual() {
        assert_eq!(trajectory_match_score(&[], &tools(&["x"])), 0.0);
    }

    #[test]
    fn test_score_partial_match() {
        assert_eq!(
            trajectory_match_score(&tools(&["a", "b"]), &tools(&["a"])),
            0.5
        );
    }

    #[test]
    fn test_score_full_match_ignores_order() {
        assert_eq!(
            trajectory_match_score(&tools(&["a", "b"]), &tools(&["b", "a"])),
            1.0
        );
    }

    #[test]
    fn test_score_duplicate_expected_each_counted() {
        // Each duplicate is an independent "appears at least once" check.
        assert_eq!(
            trajectory_match_score(&tools(&["a", "a"]), &tools(&["a"])),
            1.0
        );
    }

    #[test]
    fn test_score_no_match() {
        assert_eq!(
            trajectory_match_score(&tools(&["add_numbers"]), &tools(&["wiki_lookup"])),
            0.0
        );
    }

    #[test]
    fn test_score_always_in_unit_interval() {
        let cases: &[(&[&str], &[&str])] = &[
            (&["a"], &[]),
            (&["a", "b", "c"], &["c"]),
            (&["a"], &["a", "a", "a"]),
            (&["a", "a", "b"], &["b"]),
        ];
        for (expected, actual) in cases {
            let score = trajectory_match_score(&tools(expected), &tools(actual));
            assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }
}
