use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

pub fn init(path: &Path) -> Result<()> {
    // Refuse to overwrite an existing config
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(path, template("log_analyzer.json")?)
        .with_context(|| format!("failed to create {}", path.display()))?;

    println!("✔ Initialized config in {}", path.display());
    println!();
    println!("Next steps:");
    println!("  log-analyzer config check --config {}", path.display());
    println!("  log-analyzer run --config {}", path.display());

    Ok(())
}

/// Fetch an embedded config template as UTF-8 text
pub(crate) fn template(name: &str) -> Result<String> {
    let file = ConfigTemplates::get(name)
        .with_context(|| format!("missing embedded config template: {name}"))?;

    let s =
        std::str::from_utf8(file.data.as_ref()).context("config template is not valid UTF-8")?;

    Ok(s.to_owned())
}
