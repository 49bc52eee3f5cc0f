//! Presentation layer for agent-gauge
//!
//! This crate contains CLI definitions, the markdown report writer,
//! console output formatting, and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod report;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleSummary;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use report::markdown::MarkdownReport;
