use crate::conf::error::ConfigError;
use crate::conf::types::AnalyzerConfig;
use std::fs;
use std::path::Path;

/// Loads and validates the JSON config at `path`. Values in the file replace
/// the defaults key by key; an empty file means "all defaults".
pub fn load_config(path: &Path) -> Result<AnalyzerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    parse_config(path, &contents)
}

pub fn parse_config(origin: &Path, contents: &str) -> Result<AnalyzerConfig, ConfigError> {
    let config = if contents.trim().is_empty() {
        AnalyzerConfig::default()
    } else {
        serde_json::from_str(contents).map_err(|e| ConfigError::parse(origin, e))?
    };

    config.validate()?;
    Ok(config)
}
