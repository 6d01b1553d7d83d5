//! Configuration types and path resolution for grubctl.
//!
//! Grubctl reads optional settings as TOML from the platform's XDG config
//! path (e.g. `~/.config/grubctl/config.toml` on Linux). Every field has a
//! default matching a stock GRUB2 install.

mod loader;
mod paths;
mod resolve;
mod types;

#[allow(unused_imports)]
pub use types::MkconfigConfig;
pub use types::Config;

use anyhow::Result;
use std::path::PathBuf;

impl Config {
    /// Load the global config (or defaults) and resolve `{env:VAR}` placeholders.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_global()?;
        config.resolve_substitutions();
        Ok(config)
    }

    /// Replace the file locations with command-line overrides, when given.
    pub fn with_overrides(mut self, menu: Option<PathBuf>, defaults: Option<PathBuf>) -> Self {
        if let Some(menu) = menu {
            self.menu_path = menu;
        }
        if let Some(defaults) = defaults {
            self.defaults_path = defaults;
        }
        self
    }
}
