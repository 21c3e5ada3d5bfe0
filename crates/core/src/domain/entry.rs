// Directory Entry Domain Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Name of a single directory entry, without any path prefix
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryName(String);

impl EntryName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Build from a platform file name; non-UTF-8 bytes are replaced
    pub fn from_os(name: &std::ffi::OsStr) -> Self {
        Self(name.to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `.` or `..`
    pub fn is_dot_entry(&self) -> bool {
        self.0 == "." || self.0 == ".."
    }
}

impl fmt::Display for EntryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Entry type, best effort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "dir"),
            EntryKind::Symlink => write!(f, "symlink"),
            EntryKind::Other => write!(f, "other"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    pub name: EntryName,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            name: EntryName::new(name),
            kind,
        }
    }

    /// Synthetic `.` / `..` entries
    pub(crate) fn dot_entries() -> [DirEntry; 2] {
        [
            DirEntry::new(".", EntryKind::Directory),
            DirEntry::new("..", EntryKind::Directory),
        ]
    }
}

/// Result of enumerating one directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub path: PathBuf,
    pub entries: Vec<DirEntry>,
}

impl Listing {
    pub fn new(path: impl AsRef<Path>, entries: Vec<DirEntry>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries,
        }
    }

    /// Entry names in listing order
    pub fn names(&self) -> impl Iterator<Item = &EntryName> {
        self.entries.iter().map(|e| &e.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_entry_detection() {
        assert!(EntryName::new(".").is_dot_entry());
        assert!(EntryName::new("..").is_dot_entry());
        assert!(!EntryName::new(".hidden").is_dot_entry());
        assert!(!EntryName::new("...").is_dot_entry());
    }

    #[test]
    fn test_listing_names_keep_order() {
        let listing = Listing::new(
            "/tmp",
            vec![
                DirEntry::new("b.txt", EntryKind::File),
                DirEntry::new("a", EntryKind::Directory),
            ],
        );
        let names: Vec<&str> = listing.names().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "a"]);
        assert_eq!(listing.len(), 2);
    }

    #[test]
    fn test_entry_serializes_flat_name() {
        let json = serde_json::to_value(DirEntry::new("main.cpp", EntryKind::File)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "main.cpp", "kind": "file" })
        );
    }
}
