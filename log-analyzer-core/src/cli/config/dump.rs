use crate::conf::load_config;
use anyhow::Result;

pub fn dump(path: &std::path::Path) -> Result<()> {
    let cfg = load_config(path)?;
    println!("{}", serde_json::to_string_pretty(&cfg)?);
    Ok(())
}
