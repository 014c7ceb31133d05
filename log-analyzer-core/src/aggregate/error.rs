use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error(
        "too many parse errors: {errors} of {total} lines are malformed (allowed {threshold}%)"
    )]
    TooManyParseErrors {
        errors: u64,
        total: u64,
        threshold: f64,
    },

    #[error("failed to read log line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: io::Error,
    },
}
