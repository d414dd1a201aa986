//! Common types and helpers shared by all entities

pub mod collection;
pub mod identified;

// Re-exports
pub use collection::add_to_collection_if_missing;
pub use identified::Identified;
