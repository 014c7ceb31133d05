//! Streaming Aggregation
//!
//! Raw lines are folded one at a time into per-URL latency lists and global
//! totals. Malformed lines are counted and skipped; only once the stream is
//! exhausted does the error-rate gate decide whether the run is usable.
//!
//! lines
//! parse_line
//! Aggregator
//! AggregationState
//!

mod aggregator;
mod error;
mod state;

pub use aggregator::{Aggregator, error_budget};
pub use error::AggregateError;
pub use state::{AggregationState, UrlLatencies};

/// Decimal places kept for the global request time total.
pub const TOTAL_TIME_DIGITS: u32 = 3;
