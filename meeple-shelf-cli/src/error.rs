use std::path::PathBuf;

use meeple_shelf_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Collection file is missing
    #[error(
        "Collection file not found: {}. Export your collection as collection.csv or pass --collection.",
        .0.display()
    )]
    MissingCollection(PathBuf),

    /// Loading or building the catalog failed
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Sort not offered by the active pipeline
    #[error("Unsupported sort: {0}")]
    UnsupportedSort(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn unsupported_sort(msg: impl Into<String>) -> Self {
        Self::UnsupportedSort(msg.into())
    }

    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
