//! `GRUB_*` settings parsed from `/etc/default/grub`.
//!
//! Values are stored unquoted. Keys are kept in a sorted map so that
//! [`Settings::to_defaults_text`] produces the same text for the same
//! settings on every run.

mod writer;

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::constants::SETTING_PREFIX;

/// Key/value store of `GRUB_*` settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    values: BTreeMap<String, String>,
}

impl Settings {
    /// Parses defaults-file text.
    ///
    /// Only lines starting with `GRUB_` are read; the last assignment of a
    /// key wins. A `GRUB_` line without `=` is skipped.
    pub fn parse(text: &str) -> Self {
        let mut settings = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if !line.starts_with(SETTING_PREFIX) {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                warn!("ignoring setting without a value: {:?}", line);
                continue;
            };
            debug!("found setting: {}={}", key, value);
            settings.set(key, unquote(value));
        }
        settings
    }

    /// Returns the raw value of `key`, or `""` when unset.
    pub fn get(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or_default()
    }

    /// Assigns `value` to `key`. An empty value unsets the key on write.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// Iterates settings in key order, empty values included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Settings that would be written to disk.
    pub fn persisted(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(_, v)| !v.is_empty())
    }
}

/// Strips one layer of matching single or double quotes.
///
/// Inside double quotes, backslash escapes of `"`, `\`, `$` and `` ` `` are
/// resolved the way the shell sourcing the file would. Single-quoted text
/// is taken literally; anything else is returned unchanged.
pub fn unquote(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }
    if !(raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"')) {
        return raw.to_string();
    }

    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if matches!(next, '"' | '\\' | '$' | '`') {
                    out.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}
