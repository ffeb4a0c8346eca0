use crate::loader::{load_catalog, Result};
use parking_lot::RwLock;
use shelfmatch_core::Catalog;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Holds the current catalog snapshot
///
/// Readers clone the `Arc` and work on that snapshot for the whole request.
/// A reload builds a new catalog and swaps it in; readers holding the old
/// snapshot are unaffected.
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
    source: Option<PathBuf>,
}

impl CatalogStore {
    /// Store over an in-memory catalog with no backing file
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
            source: None,
        }
    }

    /// Load the catalog from `path` and remember it for reloads
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let catalog = load_catalog(&path)?;
        Ok(Self {
            current: RwLock::new(Arc::new(catalog)),
            source: Some(path),
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.read().clone()
    }

    pub fn replace(&self, catalog: Catalog) {
        *self.current.write() = Arc::new(catalog);
    }

    /// Re-read the backing file
    ///
    /// Returns `Ok(false)` when the store has no backing file. On a load
    /// error the current snapshot is kept.
    pub fn reload(&self) -> Result<bool> {
        let Some(path) = &self.source else {
            return Ok(false);
        };
        let catalog = load_catalog(path)?;
        info!(path = %path.display(), products = catalog.len(), "catalog reloaded");
        self.replace(catalog);
        Ok(true)
    }
}
