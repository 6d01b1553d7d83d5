//! The GRUB2 configuration model.
//!
//! [`Grub2`] pairs the parsed boot menu with the `GRUB_*` settings and
//! derives the effective default entry and timeout from both. The two are
//! always replaced together, so a reader never sees entries from one load
//! next to settings from another.

mod resolve;

use std::fs;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::info;

pub use resolve::{resolve_default_entry, resolve_timeout};

use crate::constants::{
    DEFAULT_GFXMODE, KEY_DEFAULT, KEY_GFXMODE, KEY_THEME, KEY_TIMEOUT, TIMEOUT_DISABLED,
};
use crate::error::GrubError;
use crate::menu::MenuTree;
use crate::settings::Settings;

/// Boot menu entries plus the settings that select among them.
#[derive(Debug, Clone, Default)]
pub struct Grub2 {
    menu: MenuTree,
    settings: Settings,
}

/// Reads a whole file, tagging failures with the path.
fn read_source(path: &Path) -> Result<String, GrubError> {
    fs::read_to_string(path).map_err(|source| GrubError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl Grub2 {
    /// Builds a model from menu text and defaults text.
    ///
    /// The menu is parsed first so the settings sync resolves against it.
    pub fn from_text(menu_text: &str, defaults_text: &str) -> Result<Self, GrubError> {
        let mut grub = Self {
            menu: MenuTree::parse(menu_text)?,
            settings: Settings::default(),
        };
        grub.reload_settings(defaults_text);
        Ok(grub)
    }

    /// Reads and parses both files.
    pub fn load(menu_path: &Path, defaults_path: &Path) -> Result<Self, GrubError> {
        let menu_text = read_source(menu_path)?;
        let defaults_text = read_source(defaults_path)?;
        Self::from_text(&menu_text, &defaults_text)
    }

    /// Replaces the entries from fresh menu text, keeping the current
    /// entries when the text does not parse.
    pub fn reload_entries(&mut self, menu_text: &str) -> Result<(), GrubError> {
        self.menu = MenuTree::parse(menu_text)?;
        self.sync_settings();
        Ok(())
    }

    /// Replaces the settings from fresh defaults text.
    pub fn reload_settings(&mut self, defaults_text: &str) {
        self.settings = Settings::parse(defaults_text);
        self.sync_settings();
    }

    /// Writes the resolved default entry and timeout back into the store,
    /// so missing or invalid values are replaced by their fallbacks.
    fn sync_settings(&mut self) {
        let default_entry = self.default_entry();
        let timeout = self.timeout();
        self.set_default_entry(&default_entry);
        self.set_timeout(timeout);
    }

    pub fn menu(&self) -> &MenuTree {
        &self.menu
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The entry GRUB will pre-select.
    pub fn default_entry(&self) -> String {
        resolve_default_entry(&self.menu, &self.settings)
    }

    /// Menu timeout in seconds; [`TIMEOUT_DISABLED`] when unset.
    pub fn timeout(&self) -> i32 {
        resolve_timeout(&self.settings)
    }

    pub fn gfxmode(&self) -> &str {
        match self.settings.get(KEY_GFXMODE) {
            "" => DEFAULT_GFXMODE,
            mode => mode,
        }
    }

    pub fn theme(&self) -> &str {
        self.settings.get(KEY_THEME)
    }

    /// Titles of the entries that can be selected by name or index.
    pub fn simple_entry_titles(&self) -> Vec<String> {
        self.menu.simple_titles()
    }

    /// Full titles of every menu entry, nested ones included.
    pub fn entry_titles(&self) -> Vec<String> {
        self.menu.full_titles()
    }

    pub fn set_default_entry(&mut self, title: &str) {
        self.settings.set(KEY_DEFAULT, title);
    }

    /// Sets the timeout; [`TIMEOUT_DISABLED`] removes the key instead.
    pub fn set_timeout(&mut self, timeout: i32) {
        if timeout == TIMEOUT_DISABLED {
            self.settings.set(KEY_TIMEOUT, "");
        } else {
            self.settings.set(KEY_TIMEOUT, timeout.to_string());
        }
    }

    pub fn set_gfxmode(&mut self, gfxmode: &str) {
        self.settings.set(KEY_GFXMODE, gfxmode);
    }

    pub fn set_theme(&mut self, theme_file: &str) {
        self.settings.set(KEY_THEME, theme_file);
    }

    /// The defaults-file text the current settings serialize to.
    pub fn settings_content(&self) -> String {
        self.settings.to_defaults_text()
    }

    /// Persists the settings to `path`.
    pub fn write_settings(&self, path: &Path) -> Result<(), GrubError> {
        fs::write(path, self.settings_content()).map_err(|source| GrubError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!("wrote settings to {}", path.display());
        Ok(())
    }
}

/// A [`Grub2`] model shared between readers and a reloading writer.
///
/// A single lock covers entries and settings together.
#[derive(Debug, Clone, Default)]
pub struct SharedGrub {
    inner: Arc<RwLock<Grub2>>,
}

impl SharedGrub {
    pub fn new(grub: Grub2) -> Self {
        Self {
            inner: Arc::new(RwLock::new(grub)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Grub2> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Grub2> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Parses both files outside the lock, then swaps the new model in.
    pub fn reload(&self, menu_path: &Path, defaults_path: &Path) -> Result<(), GrubError> {
        let fresh = Grub2::load(menu_path, defaults_path)?;
        *self.write() = fresh;
        Ok(())
    }

    /// Re-reads only the boot menu, keeping the current entries on failure.
    pub fn reload_entries(&self, menu_path: &Path) -> Result<(), GrubError> {
        let menu_text = read_source(menu_path)?;
        self.write().reload_entries(&menu_text)
    }
}
