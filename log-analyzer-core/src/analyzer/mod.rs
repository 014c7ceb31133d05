//! Analysis Pipeline
//!
//! Ties the pieces together for one log file:
//!
//! newest_log (unless a log is given)
//! report_path (skip when it already exists)
//! open_log
//! Aggregator
//! compute_stats
//! render_report
//! save_report
//!

mod error;
mod run;
#[cfg(test)]
mod tests;
mod types;

pub use error::AnalyzeError;
pub use run::Analyzer;
pub use types::{RunOptions, RunOutcome, RunSummary};
