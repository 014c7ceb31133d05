use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Analyze this log instead of the newest one in the log directory.
    pub log: Option<PathBuf>,
    /// Write the report here instead of the derived report path.
    pub report: Option<PathBuf>,
    /// Regenerate the report even if it already exists.
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub total_lines: u64,
    pub error_lines: u64,
    pub urls: usize,
    pub rows: usize,
    pub total_request_time: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Generated {
        log: PathBuf,
        report: PathBuf,
        summary: RunSummary,
    },
    AlreadyExists {
        log: PathBuf,
        report: PathBuf,
    },
    NoLogFound {
        log_dir: PathBuf,
    },
}
