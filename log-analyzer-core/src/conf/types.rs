use crate::conf::error::ConfigError;
use crate::stats::DEFAULT_ROUND_DIGITS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const MAX_ROUND_DIGITS: u32 = 12;

/// Analyzer settings. Keys in the config file are upper case; any key left
/// out keeps its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Maximum number of URL rows in the rendered report.
    #[serde(rename = "REPORT_SIZE")]
    pub report_size: usize,

    #[serde(rename = "REPORT_DIR")]
    pub report_dir: PathBuf,

    #[serde(rename = "REPORT_PREFIX")]
    pub report_prefix: String,

    #[serde(rename = "LOG_DIR")]
    pub log_dir: PathBuf,

    /// Filename prefix used to find the newest log in `log_dir`.
    #[serde(rename = "LOG_PREFIX")]
    pub log_prefix: String,

    /// Malformed-line percentage above which a run is rejected. Unbounded
    /// when absent.
    #[serde(rename = "MAX_PARS_ERRORS_PERC")]
    pub max_parse_errors_percent: Option<f64>,

    #[serde(rename = "ROUND_DIGITS")]
    pub round_digits: u32,

    /// External report template; the embedded one is used when absent.
    #[serde(rename = "TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Log file for the analyzer's own output; stdout when absent.
    #[serde(rename = "LOGFILE")]
    pub logfile: Option<PathBuf>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            report_size: 1000,
            report_dir: PathBuf::from("./reports"),
            report_prefix: "report".to_string(),
            log_dir: PathBuf::from("./log"),
            log_prefix: "nginx-access-ui".to_string(),
            max_parse_errors_percent: None,
            round_digits: DEFAULT_ROUND_DIGITS,
            template: None,
            logfile: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.report_size == 0 {
            return Err(ConfigError::invalid("REPORT_SIZE", "must be greater than zero"));
        }

        if let Some(threshold) = self.max_parse_errors_percent {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ConfigError::invalid(
                    "MAX_PARS_ERRORS_PERC",
                    format!("must be a non-negative percentage, got {threshold}"),
                ));
            }
        }

        if self.round_digits > MAX_ROUND_DIGITS {
            return Err(ConfigError::invalid(
                "ROUND_DIGITS",
                format!("must be at most {MAX_ROUND_DIGITS}, got {}", self.round_digits),
            ));
        }

        if self.report_prefix.is_empty() {
            return Err(ConfigError::invalid("REPORT_PREFIX", "must not be empty"));
        }

        Ok(())
    }
}
