use crate::report::error::ReportError;
use crate::stats::UrlStatistic;

pub const DEFAULT_PLACEHOLDER: &str = "$table_json";

/// Sorts by `time_sum` descending and keeps the first `report_size` entries.
/// The sort is stable, so ties keep their incoming order.
pub fn rank(stats: &[UrlStatistic], report_size: usize) -> Vec<&UrlStatistic> {
    let mut ranked: Vec<&UrlStatistic> = stats.iter().collect();
    ranked.sort_by(|a, b| b.time_sum.total_cmp(&a.time_sum));
    ranked.truncate(report_size);
    ranked
}

/// Replaces the first `placeholder` in `template` with the ranked statistics
/// as a JSON array. The surrounding markup is never inspected.
pub fn render_report(
    template: &str,
    placeholder: &str,
    stats: &[UrlStatistic],
    report_size: usize,
) -> Result<String, ReportError> {
    let ranked = rank(stats, report_size);
    let table_json = serde_json::to_string(&ranked)?;

    if !template.contains(placeholder) {
        tracing::warn!(placeholder, "report template has no placeholder; rendering it unchanged");
        return Ok(template.to_string());
    }

    tracing::info!(rows = ranked.len(), "report rendered");
    Ok(template.replacen(placeholder, &table_json, 1))
}
