use crate::aggregate::{AggregationState, Aggregator};
use crate::analyzer::error::AnalyzeError;
use crate::analyzer::types::{RunOptions, RunOutcome, RunSummary};
use crate::conf::AnalyzerConfig;
use crate::report::{
    DEFAULT_PLACEHOLDER, load_template, render_report, report_exists, report_path, save_report,
};
use crate::source::{newest_log, open_log};
use crate::stats::{UrlStatistic, compute_stats};
use std::io;
use std::path::PathBuf;

pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Produces the report for one log, unless it already exists.
    pub fn run(&self, options: &RunOptions) -> Result<RunOutcome, AnalyzeError> {
        tracing::info!("analysis started");

        let Some(log) = self.resolve_log(options)? else {
            tracing::info!(log_dir = %self.config.log_dir.display(), "no log to analyze");
            return Ok(RunOutcome::NoLogFound {
                log_dir: self.config.log_dir.clone(),
            });
        };

        let report = options.report.clone().unwrap_or_else(|| {
            report_path(&self.config.report_dir, &self.config.report_prefix, &log)
        });

        if !options.force && report_exists(&report) {
            tracing::info!(
                report = %report.display(),
                "report already exists; use --force to rewrite it"
            );
            return Ok(RunOutcome::AlreadyExists { log, report });
        }

        let template = load_template(self.config.template.as_deref())?;

        let lines = open_log(&log).map_err(|source| AnalyzeError::OpenLog {
            path: log.clone(),
            source,
        })?;
        let (state, stats) = self.analyze(lines)?;

        let rendered = render_report(
            &template,
            DEFAULT_PLACEHOLDER,
            &stats,
            self.config.report_size,
        )?;
        save_report(&report, &rendered)?;

        let summary = RunSummary {
            total_lines: state.total_lines,
            error_lines: state.error_lines,
            urls: stats.len(),
            rows: stats.len().min(self.config.report_size),
            total_request_time: state.total_request_time,
        };
        tracing::info!(
            log = %log.display(),
            report = %report.display(),
            total_lines = summary.total_lines,
            error_lines = summary.error_lines,
            urls = summary.urls,
            "analysis finished"
        );

        Ok(RunOutcome::Generated {
            log,
            report,
            summary,
        })
    }

    /// Folds a line stream and derives per-URL statistics from it.
    pub fn analyze<I>(&self, lines: I) -> Result<(AggregationState, Vec<UrlStatistic>), AnalyzeError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        tracing::info!("parsing log");
        let state = Aggregator::new(self.config.max_parse_errors_percent).fold(lines)?;
        tracing::info!(
            total_lines = state.total_lines,
            error_lines = state.error_lines,
            "log parsed"
        );

        let stats = compute_stats(&state, self.config.round_digits);
        Ok((state, stats))
    }

    fn resolve_log(&self, options: &RunOptions) -> Result<Option<PathBuf>, AnalyzeError> {
        match &options.log {
            Some(log) => Ok(Some(log.clone())),
            None => Ok(newest_log(&self.config.log_dir, &self.config.log_prefix)?),
        }
    }
}
