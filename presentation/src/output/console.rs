//! Console summary for evaluation runs

use colored::Colorize;
use gauge_domain::EvaluationResult;

/// Formats the run outcome for console display
pub struct ConsoleSummary;

impl ConsoleSummary {
    /// Format the complete run summary: one line per case plus totals.
    pub fn format(results: &[EvaluationResult]) -> String {
        let mut output = String::new();

        output.push_str(&format!("\n{}\n\n", "=== Evaluation Summary ===".cyan().bold()));

        for result in results {
            let marker = if result.is_failure() {
                "x".red().to_string()
            } else {
                "v".green().to_string()
            };

            let correctness = match result.correctness {
                Some(score) => format!("{}", score),
                None => "n/a".to_string(),
            };

            output.push_str(&format!(
                "  {} {}  trajectory {:.2}  correctness {}  {:.2}s\n",
                marker,
                result.input.bold(),
                result.trajectory_score,
                correctness,
                result.latency_seconds()
            ));

            if let Some(reason) = &result.failure {
                output.push_str(&format!("      {}\n", reason.red()));
            }
        }

        let failures = results.iter().filter(|r| r.is_failure()).count();
        let mean_trajectory = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.trajectory_score).sum::<f64>() / results.len() as f64
        };

        output.push_str(&format!(
            "\n{} {} cases, {} failed, mean trajectory score {:.2}\n",
            "Total:".cyan().bold(),
            results.len(),
            failures,
            mean_trajectory
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_domain::EvaluationCase;
    use std::time::Duration;

    #[test]
    fn test_summary_counts_failures() {
        let case = EvaluationCase::new("What is 10 + 5?", "15").with_expected_tools(["add_numbers"]);
        let results = vec![
            EvaluationResult::completed(
                &case,
                "15",
                Some(1.0),
                Duration::from_secs(1),
                vec!["add_numbers".to_string()],
                1.0,
            ),
            EvaluationResult::failed(&case, "provider error", Duration::ZERO, vec![], 0.0),
        ];

        let summary = ConsoleSummary::format(&results);
        assert!(summary.contains("2 cases, 1 failed"));
        assert!(summary.contains("mean trajectory score 0.50"));
    }
}
