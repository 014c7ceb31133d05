use crate::report::error::ReportError;
use std::fs;
use std::path::Path;

pub fn report_exists(path: &Path) -> bool {
    path.is_file()
}

/// Writes `contents` to `path`, creating missing parent directories.
pub fn save_report(path: &Path, contents: &str) -> Result<(), ReportError> {
    let write_err = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    fs::write(path, contents).map_err(write_err)?;
    tracing::info!(path = %path.display(), "report saved");
    Ok(())
}
