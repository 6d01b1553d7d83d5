//! Struct definitions and serde defaults for grubctl configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{DEFAULT_LOG_LEVEL, GRUB_DEFAULTS_PATH, GRUB_MENU_PATH};

/// Root configuration for grubctl, deserialized from `config.toml`.
///
/// Fields use serde defaults so grubctl works on a stock system
/// when no config file exists.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Generated boot menu (`/boot/grub/grub.cfg`).
    #[serde(default = "default_menu_path")]
    pub menu_path: PathBuf,
    /// Defaults file holding `GRUB_*` settings (`/etc/default/grub`).
    #[serde(default = "default_defaults_path")]
    pub defaults_path: PathBuf,
    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Boot menu regeneration settings.
    #[serde(default)]
    pub mkconfig: MkconfigConfig,
}

fn default_menu_path() -> PathBuf {
    PathBuf::from(GRUB_MENU_PATH)
}

fn default_defaults_path() -> PathBuf {
    PathBuf::from(GRUB_DEFAULTS_PATH)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

/// How to invoke the tool that rebuilds the boot menu.
///
/// `-o <menu_path>` is always appended to `args`.
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct MkconfigConfig {
    /// Program name or path. Defaults to `grub-mkconfig`.
    pub program: Option<String>,
    /// Extra leading arguments.
    #[serde(default)]
    pub args: Vec<String>,
    /// Seconds to wait before the run is killed. Defaults to 30.
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            menu_path: default_menu_path(),
            defaults_path: default_defaults_path(),
            log_level: default_log_level(),
            mkconfig: MkconfigConfig::default(),
        }
    }
}
