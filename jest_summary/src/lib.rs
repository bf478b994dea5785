pub mod args;
pub mod config;
pub mod diagnostics_trace;
pub mod error;
pub mod format;
pub mod input;
pub mod run;
pub mod summary;
pub mod test_model;

#[cfg(test)]
mod summary_test;

pub use summary::{RenderOptions, get_summary, summarize, summarize_at};
pub use test_model::{AggregatedResult, SnapshotSummary, TestCaseOutcome, TestStatus};
