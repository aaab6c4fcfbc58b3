use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// `$BAHT_HOME`, or `~/.baht` when unset.
pub fn baht_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("BAHT_HOME") {
        return Ok(PathBuf::from(dir));
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".baht"))
}

pub fn ensure_baht_home() -> Result<PathBuf> {
    let dir = baht_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}
