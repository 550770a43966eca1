// Settings loader

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::debug;

use super::settings::Settings;

/// Load settings from ~/.dijabeto/config.toml, or defaults when the file
/// does not exist.
pub fn load() -> Result<Settings> {
    let Some(path) = config_path() else {
        return Ok(Settings::default());
    };
    if !path.exists() {
        debug!("no config file at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let settings: Settings = toml::from_str(&raw)
        .with_context(|| format!("Failed to parse config at {}", path.display()))?;
    Ok(settings)
}

fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".dijabeto").join("config.toml"))
}
