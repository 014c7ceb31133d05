use crate::report::error::ReportError;
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct ReportAssets;

const DEFAULT_TEMPLATE: &str = "report.html";

/// The HTML template shipped with the analyzer.
pub fn default_template() -> Result<String, ReportError> {
    let file = ReportAssets::get(DEFAULT_TEMPLATE).ok_or_else(|| ReportError::MissingTemplate {
        name: DEFAULT_TEMPLATE.to_string(),
    })?;

    std::str::from_utf8(file.data.as_ref())
        .map(str::to_owned)
        .map_err(|_| ReportError::TemplateEncoding {
            name: DEFAULT_TEMPLATE.to_string(),
        })
}

/// Reads `path` when given, otherwise falls back to the embedded template.
pub fn load_template(path: Option<&Path>) -> Result<String, ReportError> {
    match path {
        Some(path) => {
            tracing::info!(template = %path.display(), "using report template");
            fs::read_to_string(path).map_err(|source| ReportError::ReadTemplate {
                path: path.to_path_buf(),
                source,
            })
        }
        None => default_template(),
    }
}
