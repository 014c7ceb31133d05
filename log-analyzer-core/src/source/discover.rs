use chrono::NaiveDate;
use glob::{Pattern, glob};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

static DATE_IN_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{8}").expect("valid date regex"));

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Date embedded in a log or report name as `YYYYMMDD`.
///
/// Only the first run of eight digits is considered; if it is not a real
/// calendar date the name carries no date.
pub fn date_in_name(name: &str) -> Option<NaiveDate> {
    let found = DATE_IN_NAME.find(name)?;
    NaiveDate::parse_from_str(found.as_str(), "%Y%m%d").ok()
}

/// Finds the log in `log_dir` whose name starts with `prefix` and embeds the
/// latest date. Names without a date are ignored. On equal dates the first
/// name in lexical order wins.
pub fn newest_log(log_dir: &Path, prefix: &str) -> Result<Option<PathBuf>, DiscoverError> {
    let pattern = format!(
        "{}/{}*",
        Pattern::escape(&log_dir.to_string_lossy()),
        Pattern::escape(prefix)
    );

    let mut paths: Vec<PathBuf> = glob(&pattern)
        .map_err(|source| DiscoverError::Glob {
            pattern: pattern.clone(),
            source,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut newest: Option<(NaiveDate, PathBuf)> = None;
    for path in paths {
        let Some(date) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(date_in_name)
        else {
            continue;
        };

        if newest.as_ref().is_none_or(|(best, _)| date > *best) {
            newest = Some((date, path));
        }
    }

    tracing::debug!(
        log_dir = %log_dir.display(),
        prefix,
        found = newest.is_some(),
        "log discovery finished"
    );

    Ok(newest.map(|(_, path)| path))
}
