//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/storefront/`, `~/.cache/storefront/`
//! - macOS: `~/Library/Application Support/storefront/`, `~/Library/Caches/storefront/`
//! - Windows: `%APPDATA%\storefront\`, `%LOCALAPPDATA%\storefront\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "storefront";

/// Get the application cache directory, creating it if missing
///
/// Release builds write their log files here.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create cache directory {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file, without creating its directory
pub fn app_config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME).join("config.toml"))
}
