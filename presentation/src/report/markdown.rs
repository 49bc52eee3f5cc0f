//! Markdown report writer
//!
//! Renders the per-case evaluation results into a flat markdown document,
//! one section per case with a fixed field order. Rendering is pure
//! formatting: no timestamps, no randomness, so the same results always
//! produce byte-identical output. The destination file is overwritten on
//! every run.

use gauge_domain::EvaluationResult;
use std::fs;
use std::io;
use std::path::Path;

/// Renders and writes the evaluation report.
pub struct MarkdownReport;

impl MarkdownReport {
    /// Render all results into a single markdown document.
    ///
    /// A failed case renders with a `FAILED` marker in its output field
    /// rather than a missing section, so the report always reflects every
    /// requested case.
    pub fn render(results: &[EvaluationResult]) -> String {
        let mut out = String::from("# Agent Evaluation Report\n\n");

        for result in results {
            out.push_str(&format!("## Input: {}\n", result.input));

            match (&result.output, &result.failure) {
                (Some(output), _) => out.push_str(&format!("- Output: {}\n", output)),
                (None, Some(reason)) => out.push_str(&format!("- Output: FAILED ({})\n", reason)),
                (None, None) => out.push_str("- Output:\n"),
            }

            out.push_str(&format!("- Reference: {}\n", result.reference));

            match result.correctness {
                Some(score) => out.push_str(&format!("- Correctness Score: {}\n", score)),
                None => out.push_str("- Correctness Score: n/a\n"),
            }

            out.push_str(&format!("- Latency: {:.2}s\n", result.latency_seconds()));
            out.push_str(&format!(
                "- Expected Tools: {}\n",
                format_tools(&result.expected_tools)
            ));
            out.push_str(&format!(
                "- Actual Tools: {}\n",
                format_tools(&result.actual_tools)
            ));
            out.push_str(&format!(
                "- Trajectory Match Score: {:.2}\n\n",
                result.trajectory_score
            ));
        }

        out
    }

    /// Write the report to `path`, replacing any previous report.
    pub fn write(results: &[EvaluationResult], path: &Path) -> io::Result<()> {
        fs::write(path, Self::render(results))
    }
}

fn format_tools(tools: &[String]) -> String {
    if tools.is_empty() {
        "(none)".to_string()
    } else {
        tools.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_domain::EvaluationCase;
    use std::time::Duration;

    fn completed_result() -> EvaluationResult {
        let case = EvaluationCase::new("What is 42 + 58?", "100")
            .with_expected_tools(["add_numbers"]);
        EvaluationResult::completed(
            &case,
            "100",
            Some(1.0),
            Duration::from_millis(1234),
            vec!["add_numbers".to_string()],
            1.0,
        )
    }

    fn failed_result() -> EvaluationResult {
        let case =
            EvaluationCase::new("Who is Mahendra Singh Dhoni?", "Indian cricketer")
                .with_expected_tools(["wiki_lookup"]);
        EvaluationResult::failed(&case, "provider error", Duration::from_secs(2), vec![], 0.0)
    }

    #[test]
    fn test_one_section_per_result() {
        let results = vec![completed_result(), failed_result(), completed_result()];
        let report = MarkdownReport::render(&results);

        assert_eq!(report.matches("## Input:").count(), 3);
    }

    #[test]
    fn test_section_has_all_fields_in_order() {
        let report = MarkdownReport::render(&[completed_result()]);

        let fields = [
            "## Input: What is 42 + 58?",
            "- Output: 100",
            "- Reference: 100",
            "- Correctness Score: 1",
            "- Latency: 1.23s",
            "- Expected Tools: add_numbers",
            "- Actual Tools: add_numbers",
            "- Trajectory Match Score: 1.00",
        ];

        let mut position = 0;
        for field in fields {
            let found = report[position..]
                .find(field)
                .unwrap_or_else(|| panic!("field {:?} missing or out of order", field));
            position += found + field.len();
        }
    }

    #[test]
    fn test_latency_two_decimal_places() {
        let report = MarkdownReport::render(&[completed_result()]);
        assert!(report.contains("- Latency: 1.23s"));
    }

    #[test]
    fn test_failed_case_renders_marker_not_missing_section() {
        let report = MarkdownReport::render(&[failed_result()]);

        assert!(report.contains("## Input: Who is Mahendra Singh Dhoni?"));
        assert!(report.contains("- Output: FAILED (provider error)"));
        assert!(report.contains("- Correctness Score: n/a"));
        assert!(report.contains("- Actual Tools: (none)"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let results = vec![completed_result(), failed_result()];

        let first = MarkdownReport::render(&results);
        let second = MarkdownReport::render(&results);

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_overwrites_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evaluation_report.md");

        MarkdownReport::write(&[completed_result(), failed_result()], &path).unwrap();
        MarkdownReport::write(&[completed_result()], &path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("## Input:").count(), 1);
    }
}
