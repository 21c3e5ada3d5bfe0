// Filesystem directory reader
// reason: tokio::fs so enumeration never blocks the runtime
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::ReadDir;
use tracing::debug;

use dirview_core::domain::{DirEntry, EntryKind, EntryName};
use dirview_core::port::{DirectoryHandle, DirectoryReader};
use dirview_core::{AppError, Result};

/// DirectoryReader backed by the real filesystem
///
/// A leading `~` in the path is expanded to the home directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryReader;

impl FsDirectoryReader {
    pub fn new() -> Self {
        Self
    }
}

fn expand(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) if s.starts_with('~') => PathBuf::from(shellexpand::tilde(s).into_owned()),
        _ => path.to_path_buf(),
    }
}

#[async_trait]
impl DirectoryReader for FsDirectoryReader {
    async fn open(&self, path: &Path) -> Result<Box<dyn DirectoryHandle>> {
        let resolved = expand(path);

        let read_dir = tokio::fs::read_dir(&resolved).await.map_err(|source| {
            debug!(path = %resolved.display(), error = %source, "Directory open failed");
            AppError::DirectoryUnreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        debug!(path = %resolved.display(), "Directory handle opened");

        Ok(Box::new(FsDirectoryHandle {
            path: resolved,
            inner: Some(read_dir),
            fetched: 0,
        }))
    }
}

/// Open directory; `inner` is dropped as soon as the stream is exhausted
struct FsDirectoryHandle {
    path: PathBuf,
    inner: Option<ReadDir>,
    fetched: usize,
}

async fn entry_kind(entry: &tokio::fs::DirEntry) -> EntryKind {
    match entry.file_type().await {
        Ok(ft) if ft.is_symlink() => EntryKind::Symlink,
        Ok(ft) if ft.is_dir() => EntryKind::Directory,
        Ok(ft) if ft.is_file() => EntryKind::File,
        _ => EntryKind::Other,
    }
}

#[async_trait]
impl DirectoryHandle for FsDirectoryHandle {
    async fn next_entry(&mut self) -> Result<Option<DirEntry>> {
        let Some(read_dir) = self.inner.as_mut() else {
            return Ok(None);
        };

        match read_dir.next_entry().await? {
            Some(entry) => {
                self.fetched += 1;
                let kind = entry_kind(&entry).await;
                Ok(Some(DirEntry {
                    name: EntryName::from_os(&entry.file_name()),
                    kind,
                }))
            }
            None => {
                self.inner = None;
                debug!(
                    path = %self.path.display(),
                    entries = self.fetched,
                    "Directory exhausted"
                );
                Ok(None)
            }
        }
    }
}
