// Directory reading port
// reason: async-trait so adapters can sit on tokio::fs
use async_trait::async_trait;
use std::path::Path;

use crate::domain::DirEntry;
use crate::error::Result;

/// Opens directories for enumeration
#[async_trait]
pub trait DirectoryReader: Send + Sync {
    /// Open a handle to the directory at `path`
    ///
    /// # Errors
    /// `AppError::DirectoryUnreadable` if the path cannot be opened
    async fn open(&self, path: &Path) -> Result<Box<dyn DirectoryHandle>>;
}

/// An open directory. Dropping it releases the handle.
#[async_trait]
pub trait DirectoryHandle: Send {
    /// Fetch the next entry, `None` once exhausted
    ///
    /// Calling again after `None` keeps returning `None`.
    async fn next_entry(&mut self) -> Result<Option<DirEntry>>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// In-memory DirectoryReader keyed by path
    #[derive(Default)]
    pub struct InMemoryDirectoryReader {
        dirs: HashMap<PathBuf, Vec<DirEntry>>,
        open_handles: Arc<AtomicUsize>,
    }

    impl InMemoryDirectoryReader {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_dir(mut self, path: impl Into<PathBuf>, entries: Vec<DirEntry>) -> Self {
            self.dirs.insert(path.into(), entries);
            self
        }

        /// Handles opened and not yet dropped
        pub fn open_handles(&self) -> usize {
            self.open_handles.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DirectoryReader for InMemoryDirectoryReader {
        async fn open(&self, path: &Path) -> Result<Box<dyn DirectoryHandle>> {
            let entries = self.dirs.get(path).cloned().ok_or_else(|| {
                AppError::DirectoryUnreadable {
                    path: path.to_path_buf(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
                }
            })?;
            self.open_handles.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(InMemoryHandle {
                entries: entries.into_iter(),
                open_handles: self.open_handles.clone(),
            }))
        }
    }

    struct InMemoryHandle {
        entries: std::vec::IntoIter<DirEntry>,
        open_handles: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl DirectoryHandle for InMemoryHandle {
        async fn next_entry(&mut self) -> Result<Option<DirEntry>> {
            Ok(self.entries.next())
        }
    }

    impl Drop for InMemoryHandle {
        fn drop(&mut self) {
            self.open_handles.fetch_sub(1, Ordering::SeqCst);
        }
    }
}
