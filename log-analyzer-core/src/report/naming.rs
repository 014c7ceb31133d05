use crate::source::date_in_name;
use std::path::{Path, PathBuf};

/// Where the report for `log` lives: `<prefix>-YYYY.MM.DD.html` when the log
/// name carries a date, `<prefix>_for_<log name>.html` otherwise.
pub fn report_path(report_dir: &Path, report_prefix: &str, log: &Path) -> PathBuf {
    let log_name = log
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let file_name = match date_in_name(&log_name) {
        Some(date) => format!("{report_prefix}-{}.html", date.format("%Y.%m.%d")),
        None => format!("{report_prefix}_for_{log_name}.html"),
    };

    report_dir.join(file_name)
}
