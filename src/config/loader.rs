//! File loading for grubctl configuration.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::Config;

impl Config {
    /// Loads the config from `~/.config/grubctl/config.toml`.
    ///
    /// A missing file is not an error; defaults are returned instead.
    pub(super) fn load_global() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Parses a config file at an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {:?}", path))?;
        Ok(config)
    }
}
