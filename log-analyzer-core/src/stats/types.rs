use serde::Serialize;

/// Derived latency metrics for one URL. Field names follow the JSON keys the
/// report template reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlStatistic {
    pub url: String,
    pub count: u64,
    #[serde(rename = "count_perc")]
    pub count_percent: f64,
    pub time_sum: f64,
    /// Share of the total request time, as a fraction.
    #[serde(rename = "time_perc")]
    pub time_percent: f64,
    pub time_avg: f64,
    /// Unrounded, exactly as logged.
    pub time_max: f64,
    #[serde(rename = "time_med")]
    pub time_median: f64,
}
