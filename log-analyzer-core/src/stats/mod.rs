mod compute;
mod types;

pub use compute::{DEFAULT_ROUND_DIGITS, compute_stats, url_statistic};
pub use types::UrlStatistic;
