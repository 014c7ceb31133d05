use crate::analyzer::{Analyzer, RunOptions, RunOutcome};
use crate::conf::load_config;
use crate::logging::init_logging;
use anyhow::{Context, Result};
use std::path::Path;

/// Loads the config, sets up logging as it asks, and analyzes one log.
///
/// Logging can only start once the config is known, so config errors are
/// returned to the caller rather than logged.
pub fn run_analyze(config_path: &Path, options: RunOptions) -> Result<RunOutcome> {
    let config = load_config(config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;

    let _guard = init_logging(config.logfile.as_deref());

    match Analyzer::new(config).run(&options) {
        Ok(outcome) => {
            tracing::info!("job is done");
            Ok(outcome)
        }
        Err(err) => {
            if err.is_too_many_parse_errors() {
                tracing::error!(error = %err, "log rejected");
            } else {
                tracing::error!(error = %err, "analysis failed");
            }
            Err(err.into())
        }
    }
}
