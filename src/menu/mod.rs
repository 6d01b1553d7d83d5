//! Boot menu entries reconstructed from a generated `grub.cfg`.
//!
//! [`MenuTree`] owns every [`Entry`] in encounter order. Nesting is recorded
//! as a parent index into the same collection, so the tree can be walked
//! upwards without shared ownership.

mod parser;

use serde::Serialize;

use crate::constants::FULL_TITLE_SEPARATOR;
use crate::error::GrubError;

/// Index of an [`Entry`] inside its owning [`MenuTree`].
pub type EntryId = usize;

/// Whether an entry boots something or groups further entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    MenuEntry,
    Submenu,
}

impl EntryKind {
    /// The directive keyword introducing this kind in `grub.cfg`.
    pub fn directive(self) -> &'static str {
        match self {
            Self::MenuEntry => "menuentry",
            Self::Submenu => "submenu",
        }
    }
}

/// One `menuentry` or `submenu` found in the boot menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub kind: EntryKind,
    /// Title without its surrounding quotes.
    pub title: String,
    /// Position among entries of the same kind at the same nesting level.
    pub sibling_index: usize,
    /// Nesting depth, 0 for top-level entries.
    pub level: usize,
    /// Enclosing submenu, `None` at top level.
    pub parent: Option<EntryId>,
}

/// The ordered, read-only collection of entries parsed from one menu text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    entries: Vec<Entry>,
}

impl MenuTree {
    /// Parses generated boot menu text.
    ///
    /// The first malformed directive aborts the whole parse; no partial tree
    /// is ever returned. Unclosed scopes at end of input are tolerated.
    pub fn parse(text: &str) -> Result<Self, GrubError> {
        let entries = parser::parse_entries(text)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the chain of enclosing submenus, innermost first.
    pub fn ancestors(&self, id: EntryId) -> impl Iterator<Item = &Entry> + '_ {
        let mut next = self.get(id).and_then(|e| e.parent);
        std::iter::from_fn(move || {
            let entry = self.get(next?)?;
            next = entry.parent;
            Some(entry)
        })
    }

    /// Title qualified by every ancestor submenu, outermost first,
    /// joined with `>` the way `GRUB_DEFAULT` addresses nested entries.
    pub fn full_title(&self, id: EntryId) -> Option<String> {
        let entry = self.get(id)?;
        let mut parts: Vec<&str> = self.ancestors(id).map(|e| e.title.as_str()).collect();
        parts.reverse();
        parts.push(&entry.title);
        Some(parts.join(FULL_TITLE_SEPARATOR))
    }

    /// Titles of top-level menu entries, in encounter order.
    pub fn simple_titles(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.kind == EntryKind::MenuEntry && e.parent.is_none())
            .map(|e| e.title.clone())
            .collect()
    }

    /// Full titles of every menu entry, nested ones included.
    pub fn full_titles(&self) -> Vec<String> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.kind == EntryKind::MenuEntry)
            .filter_map(|(id, _)| self.full_title(id))
            .collect()
    }
}

#[cfg(test)]
mod tests;
