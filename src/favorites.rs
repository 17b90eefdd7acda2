//! Built-in favorite directories shown in the left pane.

use std::path::{Path, PathBuf};

/// A labelled shortcut to a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteEntry {
    pub label: String,
    pub path: PathBuf,
}

impl FavoriteEntry {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// Fixed, ordered set of favorites, unique by label.
#[derive(Debug, Clone, Default)]
pub struct FavoritesRegistry {
    entries: Vec<FavoriteEntry>,
}

impl FavoritesRegistry {
    /// Build a registry in the given order. A repeated label keeps its first path.
    pub fn new(entries: impl IntoIterator<Item = FavoriteEntry>) -> Self {
        let mut unique: Vec<FavoriteEntry> = Vec::new();
        for entry in entries {
            if unique.iter().any(|existing| existing.label == entry.label) {
                log::debug!("ignoring duplicate favorite label {:?}", entry.label);
                continue;
            }
            unique.push(entry);
        }
        Self { entries: unique }
    }

    /// The default favorites rooted at `home`.
    pub fn with_defaults(home: &Path) -> Self {
        Self::new([
            FavoriteEntry::new("Desktop", home.join("Desktop")),
            FavoriteEntry::new("Documents", home.join("Documents")),
            FavoriteEntry::new("Pictures", home.join("Pictures")),
            FavoriteEntry::new("Home", home),
        ])
    }

    /// Resolve a label to its directory.
    pub fn lookup(&self, label: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.path.as_path())
    }

    pub fn get(&self, index: usize) -> Option<&FavoriteEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FavoriteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
