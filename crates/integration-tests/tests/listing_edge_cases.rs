//! Listing edge cases against the real filesystem

use std::path::PathBuf;
use std::sync::Arc;

use dirview_core::application::{ListingRequest, ListingService, SortOrder};
use dirview_core::AppError;
use dirview_infra_fs::FsDirectoryReader;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dirview-{}-{}", tag, uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn service() -> ListingService {
    ListingService::new(Arc::new(FsDirectoryReader::new()))
}

#[tokio::test]
async fn test_empty_directory_lists_nothing() {
    let dir = scratch_dir("empty");

    let listing = service().list(&ListingRequest::new(&dir)).await.unwrap();
    assert!(listing.is_empty());

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_empty_directory_with_dot_entries() {
    let dir = scratch_dir("dots");

    let req = ListingRequest {
        include_dot_entries: true,
        ..ListingRequest::new(&dir)
    };
    let listing = service().list(&req).await.unwrap();

    let names: Vec<&str> = listing.names().map(|n| n.as_str()).collect();
    assert_eq!(names, vec![".", ".."]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_hidden_files_are_listed() {
    let dir = scratch_dir("hidden");
    std::fs::write(dir.join(".rake-builder"), "").unwrap();
    std::fs::write(dir.join("visible"), "").unwrap();

    let req = ListingRequest {
        sort: SortOrder::Name,
        ..ListingRequest::new(&dir)
    };
    let listing = service().list(&req).await.unwrap();

    let names: Vec<&str> = listing.names().map(|n| n.as_str()).collect();
    assert_eq!(names, vec![".rake-builder", "visible"]);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[tokio::test]
async fn test_missing_directory_reports_unreadable() {
    let dir = std::env::temp_dir().join(format!("dirview-gone-{}", uuid::Uuid::new_v4()));

    let err = service().list(&ListingRequest::new(&dir)).await.unwrap_err();

    match err {
        AppError::DirectoryUnreadable { path, source } => {
            assert_eq!(path, dir);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_unreadable_message() {
    let dir = std::env::temp_dir().join(format!("dirview-gone-{}", uuid::Uuid::new_v4()));

    let err = service().list(&ListingRequest::new(&dir)).await.unwrap_err();
    assert!(err.to_string().starts_with("Can't read directory"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_non_utf8_name_is_lossy() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = scratch_dir("lossy");
    let raw = OsStr::from_bytes(b"bad\xffname");
    // Some filesystems refuse non-UTF-8 names
    if std::fs::write(dir.join(raw), "").is_ok() {
        let listing = service().list(&ListingRequest::new(&dir)).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.entries[0].name.as_str(), "bad\u{FFFD}name");
    }
    std::fs::remove_dir_all(&dir).unwrap();
}
