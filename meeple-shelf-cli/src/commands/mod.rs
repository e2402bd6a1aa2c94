pub(crate) mod config;
pub(crate) mod list;
pub(crate) mod stats;
pub(crate) mod tags;

use std::path::PathBuf;
use std::sync::Arc;

use meeple_shelf_catalog::settings::{Settings, load_settings, resolve_collection_path};
use meeple_shelf_catalog::{CatalogCache, CatalogEntry, PipelineConfig};

use crate::CliError;

/// A built catalog together with what produced it.
pub(crate) struct LoadedCatalog {
    pub path: PathBuf,
    pub config: PipelineConfig,
    pub entries: Arc<[CatalogEntry]>,
}

/// Read settings, or fall back to defaults with a warning if they are broken.
pub(crate) fn settings_or_default() -> Settings {
    match load_settings() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{e}; using default settings");
            Settings::default()
        }
    }
}

/// Resolve the collection path, check it exists, and build its catalog.
pub(crate) fn load_catalog(
    collection: Option<PathBuf>,
    plain: bool,
) -> Result<LoadedCatalog, CliError> {
    let settings = settings_or_default();
    let path = resolve_collection_path(collection, &settings);
    if !path.is_file() {
        return Err(CliError::MissingCollection(path));
    }

    let config = if plain {
        PipelineConfig::ratings_free()
    } else {
        settings.pipeline
    };
    log::debug!("Loading {} with {:?}", path.display(), config);

    let mut cache = CatalogCache::new(config.clone());
    let entries = cache.get_or_build(&path)?;

    Ok(LoadedCatalog {
        path,
        config,
        entries,
    })
}

/// Pluralize "game".
pub(crate) fn games(n: usize) -> &'static str {
    if n == 1 { "game" } else { "games" }
}
