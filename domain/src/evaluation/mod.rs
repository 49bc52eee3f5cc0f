//! Evaluation entities and scoring
//!
//! The evaluation pipeline: an [`EvaluationCase`](case::EvaluationCase) is
//! run through the gated agent, the tool trajectory is extracted from the
//! invocation result and scored
//! ([`trajectory`]), and everything is assembled into an
//! [`EvaluationResult`](result::EvaluationResult) for the report.

pub mod case;
pub mod result;
pub mod trajectory;
