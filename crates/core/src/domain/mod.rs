// Domain Layer - Pure value types

pub mod entry;
pub mod error;
pub mod unit;

// Re-exports
pub use entry::{DirEntry, EntryKind, EntryName, Listing};
pub use error::DomainError;
pub use unit::Unit;
