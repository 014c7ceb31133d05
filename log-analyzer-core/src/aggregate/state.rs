use std::collections::HashMap;

/// Latencies per URL, kept in order of each URL's first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlLatencies {
    index: HashMap<String, usize>,
    entries: Vec<(String, Vec<f64>)>,
}

impl UrlLatencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, url: &str, request_time: f64) {
        match self.index.get(url) {
            Some(&i) => self.entries[i].1.push(request_time),
            None => {
                self.index.insert(url.to_string(), self.entries.len());
                self.entries.push((url.to_string(), vec![request_time]));
            }
        }
    }

    pub fn get(&self, url: &str) -> Option<&[f64]> {
        self.index.get(url).map(|&i| self.entries[i].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries
            .iter()
            .map(|(url, times)| (url.as_str(), times.as_slice()))
    }

    /// Number of distinct URLs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded latencies across all URLs.
    pub fn sample_count(&self) -> u64 {
        self.entries.iter().map(|(_, t)| t.len() as u64).sum()
    }
}

/// Result of a completed pass over one log.
///
/// `total_lines == error_lines + url_latencies.sample_count()` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationState {
    pub total_lines: u64,
    pub error_lines: u64,
    /// Rounded to [`super::TOTAL_TIME_DIGITS`] decimals.
    pub total_request_time: f64,
    pub url_latencies: UrlLatencies,
}

impl AggregationState {
    pub fn parsed_lines(&self) -> u64 {
        self.total_lines - self.error_lines
    }

    pub fn error_percent(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            self.error_lines as f64 * 100.0 / self.total_lines as f64
        }
    }
}
