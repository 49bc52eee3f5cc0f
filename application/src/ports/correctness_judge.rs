//! Correctness Judge port
//!
//! Defines the interface to the external grader that scores a predicted
//! answer against a reference. The evaluation run consumes only the numeric
//! score; the rationale is carried through for the logs.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during correctness judgment
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("Judgment request failed: {0}")]
    RequestFailed(String),
}

/// A correctness judgment for one predicted answer
#[derive(Debug, Clone)]
pub struct Judgment {
    /// Correctness score in `[0, 1]`.
    pub score: f64,
    /// The grader's free-form rationale.
    pub rationale: String,
}

/// Port for grading a prediction against a reference answer
#[async_trait]
pub trait CorrectnessJudgePort: Send + Sync {
    /// Judge `prediction` against `reference` for the given `input`.
    async fn evaluate(
        &self,
        input: &str,
        prediction: &str,
        reference: &str,
    ) -> Result<Judgment, JudgeError>;
}
