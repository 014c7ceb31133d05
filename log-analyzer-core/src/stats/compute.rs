use crate::aggregate::AggregationState;
use crate::numeric::{CompensatedSum, median, round_half_even};
use crate::stats::types::UrlStatistic;

pub const DEFAULT_ROUND_DIGITS: u32 = 3;

/// One [`UrlStatistic`] per observed URL, in first-appearance order.
///
/// A log with no request time at all reports `time_percent = 0` for every URL
/// rather than dividing by zero.
pub fn compute_stats(state: &AggregationState, round_digits: u32) -> Vec<UrlStatistic> {
    tracing::debug!(urls = state.url_latencies.len(), "computing url statistics");

    state
        .url_latencies
        .iter()
        .map(|(url, times)| url_statistic(url, times, state, round_digits))
        .collect()
}

pub fn url_statistic(
    url: &str,
    times: &[f64],
    state: &AggregationState,
    round_digits: u32,
) -> UrlStatistic {
    let round = |value: f64| round_half_even(value, round_digits);

    let count = times.len() as u64;
    let time_sum = times.iter().copied().collect::<CompensatedSum>().value();

    let count_percent = if state.total_lines == 0 {
        0.0
    } else {
        count as f64 * 100.0 / state.total_lines as f64
    };

    let time_percent = if state.total_request_time > 0.0 {
        time_sum / state.total_request_time
    } else {
        0.0
    };

    let time_avg = if count == 0 {
        0.0
    } else {
        time_sum / count as f64
    };

    UrlStatistic {
        url: url.to_string(),
        count,
        count_percent: round(count_percent),
        time_sum: round(time_sum),
        time_percent: round(time_percent),
        time_avg: round(time_avg),
        time_max: times.iter().copied().fold(0.0, f64::max),
        time_median: round(median(times).unwrap_or(0.0)),
    }
}
