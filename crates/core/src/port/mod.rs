// Port Layer - Interfaces for external dependencies

pub mod directory_reader;

// Re-exports
pub use directory_reader::{DirectoryHandle, DirectoryReader};
