//! Effective default entry and timeout derived from the raw settings.

use log::{error, warn};

use crate::constants::{KEY_DEFAULT, KEY_TIMEOUT, TIMEOUT_DISABLED};
use crate::menu::MenuTree;
use crate::settings::Settings;

/// Resolves `GRUB_DEFAULT` to the title of a directly selectable entry.
///
/// Falls back to the first top-level entry (or `""` when there is none)
/// whenever the stored value is empty, names an entry nested inside a
/// submenu, or is an index that cannot be resolved.
pub fn resolve_default_entry(menu: &MenuTree, settings: &Settings) -> String {
    let raw = settings.get(KEY_DEFAULT);
    let simple = menu.simple_titles();
    let first = simple.first().cloned().unwrap_or_default();

    if raw.is_empty() {
        return first;
    }
    if simple.iter().any(|t| t == raw) {
        return raw.to_string();
    }
    if menu.full_titles().iter().any(|t| t == raw) {
        warn!("default entry {:?} is inside a submenu, using {:?}", raw, first);
        return first;
    }

    match raw.parse::<i64>() {
        Ok(index) => usize::try_from(index)
            .ok()
            .and_then(|i| simple.get(i))
            .cloned()
            .unwrap_or_else(|| {
                warn!("default entry index {} is out of range", index);
                first
            }),
        Err(_) => {
            error!("invalid number, {}={:?}", KEY_DEFAULT, raw);
            first
        }
    }
}

/// Resolves `GRUB_TIMEOUT`, mapping empty or unparsable values to
/// [`TIMEOUT_DISABLED`]. Other negative values pass through unchanged.
pub fn resolve_timeout(settings: &Settings) -> i32 {
    let raw = settings.get(KEY_TIMEOUT);
    if raw.is_empty() {
        return TIMEOUT_DISABLED;
    }
    raw.parse().unwrap_or_else(|_| {
        error!("invalid value, {}={:?}", KEY_TIMEOUT, raw);
        TIMEOUT_DISABLED
    })
}
