//! Line scanner that rebuilds the menu hierarchy from `grub.cfg`.
//!
//! Only `menuentry`, `submenu` and bare `}` lines matter. Opening braces
//! sit on the directive line in generated output and are not tracked.

use std::sync::LazyLock;

use log::{debug, info};
use regex::Regex;

use super::{Entry, EntryId, EntryKind};
use crate::error::GrubError;

static SINGLE_QUOTED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(menuentry|submenu)\s+'(.*?)'.*$").expect("valid title regex")
});

static DOUBLE_QUOTED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(menuentry|submenu)\s+"(.*?)".*$"#).expect("valid title regex")
});

/// Extracts the quoted title from a directive line, dropping any trailing
/// `--class`, `--id` or similar annotations.
pub(super) fn parse_title(line: &str) -> Option<String> {
    SINGLE_QUOTED_TITLE
        .captures(line)
        .or_else(|| DOUBLE_QUOTED_TITLE.captures(line))
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Scanner state threaded through one parse.
struct Scanner {
    entries: Vec<Entry>,
    level: usize,
    /// Per-level counters, indexed by `[MenuEntry, Submenu]`.
    counters: Vec<[usize; 2]>,
    /// Open submenus; the innermost is last.
    parents: Vec<EntryId>,
    in_menuentry: bool,
}

impl Scanner {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            level: 0,
            counters: vec![[0, 0]],
            parents: Vec::new(),
            in_menuentry: false,
        }
    }

    fn next_sibling_index(&mut self, kind: EntryKind) -> usize {
        let slot = match kind {
            EntryKind::MenuEntry => 0,
            EntryKind::Submenu => 1,
        };
        if self.counters.len() <= self.level {
            self.counters.resize(self.level + 1, [0, 0]);
        }
        let index = self.counters[self.level][slot];
        self.counters[self.level][slot] += 1;
        index
    }

    fn open(&mut self, kind: EntryKind, line: &str) -> Result<(), GrubError> {
        if self.in_menuentry {
            return Err(GrubError::NestedDirective {
                directive: kind.directive(),
            });
        }
        let title = parse_title(line).ok_or_else(|| GrubError::InvalidTitle {
            line: line.to_string(),
        })?;
        info!(
            "found entry: [{}] {}{}",
            self.level,
            " ".repeat(self.level * 2),
            title
        );

        let entry = Entry {
            kind,
            title,
            sibling_index: self.next_sibling_index(kind),
            level: self.level,
            parent: self.parents.last().copied(),
        };
        self.entries.push(entry);

        match kind {
            EntryKind::MenuEntry => self.in_menuentry = true,
            EntryKind::Submenu => {
                self.parents.push(self.entries.len() - 1);
                self.level += 1;
                if self.counters.len() <= self.level {
                    self.counters.resize(self.level + 1, [0, 0]);
                }
                self.counters[self.level] = [0, 0];
            }
        }
        Ok(())
    }

    fn close(&mut self) {
        if self.in_menuentry {
            self.in_menuentry = false;
        } else if self.level > 0 {
            self.parents.pop();
            self.level -= 1;
        }
    }
}

/// Parses menu text into entries in encounter order.
pub(super) fn parse_entries(text: &str) -> Result<Vec<Entry>, GrubError> {
    let mut scanner = Scanner::new();

    for line in text.lines() {
        let line = line.trim();
        if line.starts_with("menuentry ") {
            scanner.open(EntryKind::MenuEntry, line)?;
        } else if line.starts_with("submenu ") {
            scanner.open(EntryKind::Submenu, line)?;
        } else if line == "}" {
            scanner.close();
        }
    }

    if scanner.in_menuentry || !scanner.parents.is_empty() {
        debug!(
            "menu text ended with {} open scope(s)",
            scanner.level + usize::from(scanner.in_menuentry)
        );
    }
    Ok(scanner.entries)
}
