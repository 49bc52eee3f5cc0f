//! Progress reporting for evaluation runs

use colored::Colorize;
use gauge_application::EvalProgressNotifier;
use gauge_domain::{EvaluationCase, EvaluationResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports per-case progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }

    fn truncate(input: &str, max: usize) -> String {
        if input.chars().count() <= max {
            input.to_string()
        } else {
            let head: String = input.chars().take(max).collect();
            format!("{}...", head)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl EvalProgressNotifier for ProgressReporter {
    fn on_run_start(&self, total_cases: usize) {
        let pb = ProgressBar::new(total_cases as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Evaluating");

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_case_start(&self, case: &EvaluationCase, _index: usize, _total: usize) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            pb.set_message(Self::truncate(&case.input, 40));
        }
    }

    fn on_case_complete(&self, result: &EvaluationResult, _index: usize, _total: usize) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if result.is_failure() {
                format!("{} {}", "x".red(), Self::truncate(&result.input, 40))
            } else {
                format!("{} {}", "v".green(), Self::truncate(&result.input, 40))
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_run_complete(&self) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message("done".green().to_string());
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl EvalProgressNotifier for SimpleProgress {
    fn on_run_start(&self, total_cases: usize) {
        println!("{} Evaluating {} cases", "->".cyan(), total_cases);
    }

    fn on_case_start(&self, case: &EvaluationCase, index: usize, total: usize) {
        println!("  [{}/{}] {}", index + 1, total, case.input);
    }

    fn on_case_complete(&self, result: &EvaluationResult, _index: usize, _total: usize) {
        if result.is_failure() {
            println!("    {} failed", "x".red());
        } else {
            println!("    {} trajectory {:.2}", "v".green(), result.trajectory_score);
        }
    }

    fn on_run_complete(&self) {
        println!();
    }
}
