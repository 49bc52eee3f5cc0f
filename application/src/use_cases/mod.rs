//! Use cases

pub mod run_evaluation;
