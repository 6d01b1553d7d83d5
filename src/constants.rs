//! Centralized constants for grubctl.
//!
//! File locations, setting keys, and sentinel values live here so they can
//! be changed in one place.

/// Application name used in CLI output and directory paths.
pub const APP_NAME: &str = "grubctl";

/// Configuration filename.
pub const CONFIG_FILENAME: &str = "config.toml";

// --- GRUB files ---

/// Generated boot menu read by the menu parser.
pub const GRUB_MENU_PATH: &str = "/boot/grub/grub.cfg";

/// Defaults file holding `GRUB_*` settings.
pub const GRUB_DEFAULTS_PATH: &str = "/etc/default/grub";

// --- Settings keys ---

/// Prefix every recognized setting key starts with.
pub const SETTING_PREFIX: &str = "GRUB_";

pub const KEY_DEFAULT: &str = "GRUB_DEFAULT";
pub const KEY_TIMEOUT: &str = "GRUB_TIMEOUT";
pub const KEY_GFXMODE: &str = "GRUB_GFXMODE";
pub const KEY_THEME: &str = "GRUB_THEME";

/// Value reported for `GRUB_GFXMODE` when the key is absent or empty.
pub const DEFAULT_GFXMODE: &str = "auto";

/// Timeout meaning "disabled": the key is absent or empty on disk.
pub const TIMEOUT_DISABLED: i32 = -2;

/// Separator between ancestor submenu titles in a full entry title.
pub const FULL_TITLE_SEPARATOR: &str = ">";

// --- Regeneration ---

/// Tool that rebuilds the boot menu from the defaults file.
pub const MKCONFIG_PROGRAM: &str = "grub-mkconfig";

/// Seconds to wait for the regeneration tool before giving up.
pub const MKCONFIG_TIMEOUT_SECS: u64 = 30;

// --- Logging ---

/// Log level used when neither the config nor `--verbose` picks one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
