//! Colored preview of a pending defaults-file rewrite.
//!
//! Used by `--dry-run` to show what [`crate::grub::Grub2::write_settings`]
//! would change without touching the file.

use std::path::Path;

use colored::Colorize;
use similar::{ChangeTag, TextDiff};

/// Unified diff between the file on disk and the text about to replace it.
///
/// Returns `None` when the two are identical.
pub fn settings_diff(current: &str, pending: &str, path: &Path) -> Option<String> {
    if current == pending {
        return None;
    }

    let diff = TextDiff::from_lines(current, pending);
    let mut output = String::new();
    output.push_str(&format!("--- {}", path.display()).bold().to_string());
    output.push('\n');
    output.push_str(&format!("+++ {} (pending)", path.display()).bold().to_string());
    output.push('\n');

    for hunk in diff.unified_diff().context_radius(2).iter_hunks() {
        output.push_str(&hunk.header().to_string().cyan().to_string());
        output.push('\n');
        for change in hunk.iter_changes() {
            let line = change.to_string();
            let line = line.trim_end_matches('\n');
            match change.tag() {
                ChangeTag::Delete => output.push_str(&format!("-{}", line).red().to_string()),
                ChangeTag::Insert => output.push_str(&format!("+{}", line).green().to_string()),
                ChangeTag::Equal => output.push_str(&format!(" {}", line)),
            }
            output.push('\n');
        }
    }
    Some(output)
}
