//! Catalog loading and snapshot management for ShelfMatch.

pub mod loader;
pub mod store;

pub use loader::{load_catalog, parse_catalog, LoadError, Result};
pub use store::CatalogStore;
