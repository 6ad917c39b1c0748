// Configuration loader
// Loads settings from ~/.torqa/config.toml, then lets environment variables override them

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;

/// Location of the user config file (`~/.torqa/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".torqa").join("config.toml"))
}

/// Load configuration from the user config file and environment.
///
/// A missing config file is not an error; defaults are used instead.
/// The result is not validated here because CLI flags may still fill in
/// missing values. Call [`Config::validate`] once all overrides are applied.
pub fn load_config() -> Result<Config> {
    let mut config = match default_config_path() {
        Some(path) if path.exists() => load_config_from(&path)?,
        _ => Config::default(),
    };

    if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
        if !api_key.is_empty() {
            config.api_key = api_key;
        }
    }
    if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
        if !base_url.is_empty() {
            config.base_url = base_url;
        }
    }

    Ok(config)
}

/// Parse a config file at an explicit path
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;

    let mut config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config TOML at {}", path.display()))?;
    config.base_url = config.base_url.trim_end_matches('/').to_string();

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}
