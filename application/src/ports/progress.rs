//! Progress notification port for the evaluation run.

use gauge_domain::{EvaluationCase, EvaluationResult};

/// Receives progress events while cases are evaluated.
///
/// Implemented by the presentation layer (progress bars); [`NoProgress`]
/// is the silent default.
pub trait EvalProgressNotifier: Send + Sync {
    fn on_run_start(&self, total_cases: usize);
    fn on_case_start(&self, case: &EvaluationCase, index: usize, total: usize);
    fn on_case_complete(&self, result: &EvaluationResult, index: usize, total: usize);
    fn on_run_complete(&self);
}

/// A progress notifier that does nothing.
pub struct NoProgress;

impl EvalProgressNotifier for NoProgress {
    fn on_run_start(&self, _total_cases: usize) {}
    fn on_case_start(&self, _case: &EvaluationCase, _index: usize, _total: usize) {}
    fn on_case_complete(&self, _result: &EvaluationResult, _index: usize, _total: usize) {}
    fn on_run_complete(&self) {}
}
