//! Infrastructure adapters for archreport.
//!
//! This crate implements the ports defined in
//! `archreport-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod bookmark_store;
pub mod catalog_loader;

// Re-export commonly used adapters
pub use bookmark_store::{InMemoryBookmarkStore, JsonFileBookmarkStore};
pub use catalog_loader::CatalogLoader;
