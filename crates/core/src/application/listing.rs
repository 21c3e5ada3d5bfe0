// Listing Use Case - open, iterate, release

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::{DirEntry, Listing};
use crate::error::Result;
use crate::port::DirectoryReader;

/// Directory listed when none is given
pub const DEFAULT_LISTING_PATH: &str = ".";

/// Entry ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Whatever order the platform yields
    #[default]
    Platform,
    /// Byte-wise by entry name
    Name,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingRequest {
    pub path: PathBuf,

    /// Prepend `.` and `..`
    #[serde(default)]
    pub include_dot_entries: bool,

    #[serde(default)]
    pub sort: SortOrder,
}

impl ListingRequest {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            include_dot_entries: false,
            sort: SortOrder::Platform,
        }
    }
}

impl Default for ListingRequest {
    fn default() -> Self {
        Self::new(DEFAULT_LISTING_PATH)
    }
}

/// Listing Service
pub struct ListingService {
    reader: Arc<dyn DirectoryReader>,
}

impl ListingService {
    pub fn new(reader: Arc<dyn DirectoryReader>) -> Self {
        Self { reader }
    }

    /// Enumerate a directory into a `Listing`
    pub async fn list(&self, req: &ListingRequest) -> Result<Listing> {
        let mut entries = Vec::new();
        self.stream(req, |entry| {
            entries.push(entry.clone());
            Ok(())
        })
        .await?;
        Ok(Listing::new(&req.path, entries))
    }

    /// Enumerate a directory, handing each entry to `sink` as it is fetched
    ///
    /// With `SortOrder::Name` all entries are fetched before the first is
    /// emitted. If the platform yields `.` or `..` itself they are dropped
    /// when `include_dot_entries` already supplied them. Returns the number
    /// of entries emitted.
    ///
    /// # Errors
    /// * `AppError::DirectoryUnreadable` - the directory could not be opened
    /// * any error the handle reports while fetching entries
    /// * the first error returned by `sink`; enumeration stops there
    pub async fn stream<F>(&self, req: &ListingRequest, mut sink: F) -> Result<usize>
    where
        F: FnMut(&DirEntry) -> Result<()>,
    {
        let mut handle = self.reader.open(&req.path).await?;
        debug!(path = %req.path.display(), "Directory opened");

        let mut emitted = 0;
        if req.include_dot_entries {
            for dot in DirEntry::dot_entries() {
                sink(&dot)?;
                emitted += 1;
            }
        }

        let mut pending = Vec::new();
        loop {
            let entry = match handle.next_entry().await {
                Ok(Some(entry)) if req.include_dot_entries && entry.name.is_dot_entry() => {
                    continue
                }
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!(path = %req.path.display(), error = %e, "Failed to read directory entry");
                    return Err(e);
                }
            };

            match req.sort {
                SortOrder::Platform => {
                    sink(&entry)?;
                    emitted += 1;
                }
                SortOrder::Name => pending.push(entry),
            }
        }
        drop(handle);

        if !pending.is_empty() {
            pending.sort_by(|a, b| a.name.cmp(&b.name));
            for entry in &pending {
                sink(entry)?;
            }
            emitted += pending.len();
        }

        debug!(path = %req.path.display(), entries = emitted, "Directory released");
        Ok(emitted)
    }
}
