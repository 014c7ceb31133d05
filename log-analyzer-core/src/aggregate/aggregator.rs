use crate::aggregate::error::AggregateError;
use crate::aggregate::state::{AggregationState, UrlLatencies};
use crate::aggregate::TOTAL_TIME_DIGITS;
use crate::numeric::{CompensatedSum, round_half_even};
use crate::parse::{LineError, parse_line};
use std::io;

/// Digits the budget product is snapped to before rounding up, so that
/// `375 * 8.8 / 100` counts as `33` rather than `33.00000000000001`.
const BUDGET_DIGITS: u32 = 9;

/// Number of malformed lines tolerated out of `total` at `threshold` percent.
pub fn error_budget(total: u64, threshold: f64) -> u64 {
    round_half_even(total as f64 * threshold / 100.0, BUDGET_DIGITS).ceil() as u64
}

pub struct Aggregator {
    /// `None` disables the error-rate gate.
    max_error_percent: Option<f64>,
    total_lines: u64,
    error_lines: u64,
    request_time: CompensatedSum,
    latencies: UrlLatencies,
}

impl Aggregator {
    pub fn new(max_error_percent: Option<f64>) -> Self {
        Self {
            max_error_percent,
            total_lines: 0,
            error_lines: 0,
            request_time: CompensatedSum::new(),
            latencies: UrlLatencies::new(),
        }
    }

    /// Folds a whole line stream. Read failures abort the pass unchanged;
    /// malformed lines never do.
    pub fn fold<I>(mut self, lines: I) -> Result<AggregationState, AggregateError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        for line in lines {
            let line = line.map_err(|source| AggregateError::Read {
                line: self.total_lines + 1,
                source,
            })?;
            self.push(&line);
        }

        self.finish()
    }

    pub fn push(&mut self, line: &str) {
        self.total_lines += 1;

        match parse_line(line).and_then(|record| {
            let url = record.request_path().ok_or(LineError::Format {
                field: "request",
                line: line.to_string(),
            })?;
            let time = record.request_time().ok_or(LineError::Format {
                field: "request_time",
                line: line.to_string(),
            })?;
            self.latencies.record(url, time);
            Ok(time)
        }) {
            Ok(time) => self.request_time.add(time),
            Err(err) => {
                self.error_lines += 1;
                tracing::debug!(
                    line = self.total_lines,
                    field = err.field().unwrap_or("-"),
                    "skipping malformed line"
                );
            }
        }
    }

    pub fn total_lines(&self) -> u64 {
        self.total_lines
    }

    pub fn error_lines(&self) -> u64 {
        self.error_lines
    }

    /// Rounds the request time total and applies the error-rate gate.
    pub fn finish(self) -> Result<AggregationState, AggregateError> {
        debug_assert_eq!(
            self.total_lines,
            self.error_lines + self.latencies.sample_count()
        );

        if let Some(threshold) = self.max_error_percent {
            if self.total_lines > 0 && self.error_lines > error_budget(self.total_lines, threshold)
            {
                return Err(AggregateError::TooManyParseErrors {
                    errors: self.error_lines,
                    total: self.total_lines,
                    threshold,
                });
            }
        }

        Ok(AggregationState {
            total_lines: self.total_lines,
            error_lines: self.error_lines,
            total_request_time: round_half_even(self.request_time.value(), TOTAL_TIME_DIGITS),
            url_latencies: self.latencies,
        })
    }
}
