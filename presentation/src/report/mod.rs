//! Report rendering

pub mod markdown;

pub use markdown::MarkdownReport;
