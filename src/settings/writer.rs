//! Serialization of [`Settings`] back to defaults-file text.

use super::Settings;

impl Settings {
    /// Renders every non-empty setting as `KEY="value"`, one per line.
    ///
    /// Keys with empty values are left out entirely, which is how a setting
    /// is removed from the file.
    pub fn to_defaults_text(&self) -> String {
        let mut content = String::new();
        for (key, value) in self.persisted() {
            content.push_str(key);
            content.push('=');
            content.push_str(&quote(value));
            content.push('\n');
        }
        content
    }
}

/// Wraps `value` in double quotes, escaping `"` and `\`.
///
/// `$` is left alone so references such as `$GRUB_CMDLINE_LINUX` keep
/// expanding when the file is sourced.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
