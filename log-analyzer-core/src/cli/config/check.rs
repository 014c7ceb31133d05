use crate::conf::{AnalyzerConfig, load_config};
use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

pub fn check(path: &Path) -> Result<()> {
    let cfg = load_config(path)?;

    for line in summary_lines(&cfg) {
        println!("{} {}", "✔".green(), line);
    }

    Ok(())
}

pub fn summary_lines(cfg: &AnalyzerConfig) -> Vec<String> {
    let threshold = match cfg.max_parse_errors_percent {
        Some(pct) => format!("{pct}% malformed lines allowed"),
        None => "no malformed line limit".to_string(),
    };
    let template = match &cfg.template {
        Some(path) => format!("template {}", path.display()),
        None => "embedded report template".to_string(),
    };

    vec![
        "Config loaded successfully".to_string(),
        format!("logs: {}/{}*", cfg.log_dir.display(), cfg.log_prefix),
        format!(
            "reports: {}/{}-*.html ({} rows max)",
            cfg.report_dir.display(),
            cfg.report_prefix,
            cfg.report_size
        ),
        threshold,
        template,
    ]
}
