// Application Layer - Use Cases

pub mod listing;
pub mod unit;

// Re-exports
pub use listing::{ListingRequest, ListingService, SortOrder, DEFAULT_LISTING_PATH};
