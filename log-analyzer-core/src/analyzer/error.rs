use crate::aggregate::AggregateError;
use crate::report::ReportError;
use crate::source::DiscoverError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    #[error("failed to open log {path}: {source}")]
    OpenLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

impl AnalyzeError {
    /// True for the error-rate gate, the one failure caused by log content
    /// rather than by the environment.
    pub fn is_too_many_parse_errors(&self) -> bool {
        matches!(
            self,
            AnalyzeError::Aggregate(AggregateError::TooManyParseErrors { .. })
        )
    }
}
