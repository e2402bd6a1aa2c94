//! Memoization table for built catalogs.
//!
//! Catalogs are keyed by canonical source path. Each cached catalog carries
//! a fingerprint of the source (length + modification time); a lookup whose
//! fingerprint no longer matches rebuilds the whole catalog. Entry lists are
//! handed out as `Arc<[CatalogEntry]>` and never mutated afterwards.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use crate::builder::build_catalog;
use crate::config::PipelineConfig;
use crate::entry::CatalogEntry;
use crate::error::CatalogError;

/// Cheap identity of a source file's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFingerprint {
    pub len: u64,
    pub modified: Option<SystemTime>,
}

/// Fingerprint the file at `path`.
pub fn fingerprint(path: &Path) -> Result<SourceFingerprint, CatalogError> {
    let meta = std::fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CatalogError::SourceUnavailable(path.to_path_buf()),
        _ => CatalogError::io(path, e),
    })?;
    Ok(SourceFingerprint {
        len: meta.len(),
        modified: meta.modified().ok(),
    })
}

/// Canonical path used as the cache key; falls back to the path as given.
pub fn source_key(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[derive(Debug)]
struct CachedCatalog {
    fingerprint: SourceFingerprint,
    entries: Arc<[CatalogEntry]>,
}

/// Built catalogs for one pipeline configuration.
#[derive(Debug, Default)]
pub struct CatalogCache {
    config: PipelineConfig,
    catalogs: HashMap<PathBuf, CachedCatalog>,
}

impl CatalogCache {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            catalogs: HashMap::new(),
        }
    }

    /// Return the catalog for `source`, building it if it is not cached or
    /// the file changed since it was built.
    pub fn get_or_build(&mut self, source: &Path) -> Result<Arc<[CatalogEntry]>, CatalogError> {
        let key = source_key(source);
        let current = fingerprint(&key)?;

        if let Some(cached) = self.catalogs.get(&key) {
            if cached.fingerprint == current {
                log::debug!("Catalog cache hit for {}", key.display());
                return Ok(Arc::clone(&cached.entries));
            }
            log::debug!("{} changed since last build, rebuilding", key.display());
        }

        let entries: Arc<[CatalogEntry]> = build_catalog(&key, &self.config)?.into();
        self.catalogs.insert(
            key,
            CachedCatalog {
                fingerprint: current,
                entries: Arc::clone(&entries),
            },
        );
        Ok(entries)
    }

    /// Drop the cached catalog for `source`. Returns whether one was cached.
    pub fn invalidate(&mut self, source: &Path) -> bool {
        self.catalogs.remove(&source_key(source)).is_some()
    }

    pub fn clear(&mut self) {
        self.catalogs.clear();
    }

    pub fn contains(&self, source: &Path) -> bool {
        self.catalogs.contains_key(&source_key(source))
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}
