//! Output rendering for grubctl.
//!
//! A [`Summary`] snapshot of the model is rendered either as colored text
//! for people or as JSON for scripts, selected through the [`Renderer`]
//! trait.

use std::collections::BTreeMap;

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::constants::TIMEOUT_DISABLED;
use crate::grub::Grub2;
use crate::menu::EntryKind;

/// One entry as shown to the user.
#[derive(Debug, Serialize)]
pub struct EntryView {
    pub kind: EntryKind,
    pub title: String,
    pub full_title: String,
    pub level: usize,
    pub sibling_index: usize,
}

/// Snapshot of everything `grubctl show` reports.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub default_entry: String,
    pub timeout: i32,
    pub gfxmode: String,
    pub theme: String,
    /// Settings as they would be written, empty values left out.
    pub settings: BTreeMap<String, String>,
    pub entries: Vec<EntryView>,
}

impl Summary {
    pub fn from_grub(grub: &Grub2) -> Self {
        let menu = grub.menu();
        let entries = menu
            .entries()
            .iter()
            .enumerate()
            .map(|(id, e)| EntryView {
                kind: e.kind,
                title: e.title.clone(),
                full_title: menu.full_title(id).unwrap_or_default(),
                level: e.level,
                sibling_index: e.sibling_index,
            })
            .collect();
        Self {
            default_entry: grub.default_entry(),
            timeout: grub.timeout(),
            gfxmode: grub.gfxmode().to_string(),
            theme: grub.theme().to_string(),
            settings: grub
                .settings()
                .persisted()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            entries,
        }
    }
}

/// Human-readable timeout.
pub fn format_timeout(timeout: i32) -> String {
    match timeout {
        TIMEOUT_DISABLED => "disabled".to_string(),
        -1 => "wait indefinitely".to_string(),
        n => format!("{}s", n),
    }
}

/// Renders the summary as an indented entry tree under a settings header.
/// The effective default is marked with `*`.
pub fn format_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let theme = if summary.theme.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        summary.theme.clone()
    };
    out.push_str(&format!("{} {}\n", "Default:".bold(), summary.default_entry.yellow()));
    out.push_str(&format!("{} {}\n", "Timeout:".bold(), format_timeout(summary.timeout)));
    out.push_str(&format!("{} {}\n", "Gfxmode:".bold(), summary.gfxmode));
    out.push_str(&format!("{} {}\n", "Theme:".bold(), theme));
    out.push('\n');

    for entry in &summary.entries {
        let indent = "  ".repeat(entry.level);
        let line = match entry.kind {
            EntryKind::Submenu => format!("{}{} {}", indent, "+".dimmed(), entry.title.cyan()),
            EntryKind::MenuEntry if entry.level == 0 && entry.title == summary.default_entry => {
                format!("{}{} {}", indent, "*".green().bold(), entry.title.green().bold())
            }
            EntryKind::MenuEntry => format!("{}- {}", indent, entry.title),
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Renders a plain list of titles, one per line, marking `default`.
pub fn format_titles(titles: &[String], default: &str) -> String {
    titles
        .iter()
        .map(|t| {
            if t == default {
                format!("{} {}\n", "*".green().bold(), t)
            } else {
                format!("  {}\n", t)
            }
        })
        .collect()
}

/// Destination for command output.
pub trait Renderer {
    /// Render the full model snapshot.
    fn render_summary(&mut self, summary: &Summary) -> Result<()>;

    /// Render a list of entry titles.
    fn render_titles(&mut self, titles: &[String], default: &str) -> Result<()>;
}

/// Prints colored text to stdout.
pub struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn render_summary(&mut self, summary: &Summary) -> Result<()> {
        print!("{}", format_summary(summary));
        Ok(())
    }

    fn render_titles(&mut self, titles: &[String], default: &str) -> Result<()> {
        print!("{}", format_titles(titles, default));
        Ok(())
    }
}

/// Prints pretty JSON to stdout.
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_summary(&mut self, summary: &Summary) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(summary)?);
        Ok(())
    }

    fn render_titles(&mut self, titles: &[String], default: &str) -> Result<()> {
        let value = serde_json::json!({ "default_entry": default, "titles": titles });
        println!("{}", serde_json::to_string_pretty(&value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: &str = "menuentry 'Deepin GNU/Linux' {\n}\nsubmenu 'Advanced' {\nmenuentry 'Recovery' {\n}\n}\nmenuentry 'Memory Test' {\n}\n";

    #[test]
    fn test_summary_from_grub() {
        let grub = Grub2::from_text(MENU, "GRUB_DEFAULT=1\nGRUB_TIMEOUT=5\n").unwrap();
        let summary = Summary::from_grub(&grub);
        assert_eq!(summary.default_entry, "Memory Test");
        assert_eq!(summary.timeout, 5);
        assert_eq!(summary.gfxmode, "auto");
        assert_eq!(summary.entries.len(), 4);
        assert_eq!(summary.entries[2].full_title, "Advanced>Recovery");
        assert_eq!(summary.entries[2].level, 1);
    }

    #[test]
    fn test_format_summary_tree() {
        colored::control::set_override(false);
        let grub = Grub2::from_text(MENU, "GRUB_DEFAULT=\"Memory Test\"\n").unwrap();
        let text = format_summary(&Summary::from_grub(&grub));
        assert!(text.contains("Default: Memory Test\n"));
        assert!(text.contains("Timeout: disabled\n"));
        assert!(text.contains("Theme: (none)\n"));
        assert!(text.contains("- Deepin GNU/Linux\n+ Advanced\n  - Recovery\n* Memory Test\n"));
    }

    #[test]
    fn test_format_timeout() {
        assert_eq!(format_timeout(-2), "disabled");
        assert_eq!(format_timeout(-1), "wait indefinitely");
        assert_eq!(format_timeout(10), "10s");
    }

    #[test]
    fn test_summary_serializes() {
        let grub = Grub2::from_text(MENU, "").unwrap();
        let json = serde_json::to_value(Summary::from_grub(&grub)).unwrap();
        assert_eq!(json["default_entry"], "Deepin GNU/Linux");
        assert_eq!(json["timeout"], -2);
        assert_eq!(json["entries"][1]["kind"], "submenu");
        assert_eq!(json["settings"]["GRUB_DEFAULT"], "Deepin GNU/Linux");
    }
}
