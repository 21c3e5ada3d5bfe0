// dirview Infrastructure - Filesystem Adapter
// Implements: DirectoryReader

pub mod fs_directory_reader;

pub use fs_directory_reader::FsDirectoryReader;
