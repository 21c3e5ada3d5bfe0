//! Output rendering for listings and units

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use dirview_core::domain::{DirEntry, EntryKind, Listing};

/// Printed before the entry names in plain output
pub const LISTING_HEADER: &str = "The contents of this directory:";

/// Printed when the directory cannot be opened
pub const UNREADABLE_MESSAGE: &str = "Can't read directory";

/// `UNREADABLE_MESSAGE`, red only when the target stream is a terminal
pub fn unreadable_message(color: bool) -> String {
    if color {
        UNREADABLE_MESSAGE.red().to_string()
    } else {
        UNREADABLE_MESSAGE.to_string()
    }
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "KIND")]
    kind: String,
}

impl From<&DirEntry> for EntryRow {
    fn from(entry: &DirEntry) -> Self {
        let kind = entry.kind.to_string();
        let kind = match entry.kind {
            EntryKind::Directory => kind.blue().bold().to_string(),
            EntryKind::Symlink => kind.cyan().to_string(),
            EntryKind::File => kind,
            EntryKind::Other => kind.yellow().to_string(),
        };
        Self {
            name: entry.name.to_string(),
            kind,
        }
    }
}

/// One line per entry, no header
pub fn plain_line(entry: &DirEntry) -> String {
    entry.name.to_string()
}

pub fn table(listing: &Listing) -> String {
    let rows: Vec<EntryRow> = listing.entries.iter().map(EntryRow::from).collect();
    Table::new(rows).to_string()
}

#[derive(Serialize)]
struct JsonListing<'a> {
    path: String,
    count: usize,
    entries: &'a [DirEntry],
}

pub fn json(listing: &Listing) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonListing {
        path: listing.path.display().to_string(),
        count: listing.len(),
        entries: &listing.entries,
    })
}
