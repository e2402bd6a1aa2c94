use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while loading a collection source.
///
/// Everything below the source level (bad cells, missing ids, unparsable
/// ratings) is recovered in place and never reaches this type.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source file does not exist. Callers are expected to check first.
    #[error("Collection source not found: {}", .0.display())]
    SourceUnavailable(PathBuf),

    #[error("I/O error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },
}

impl CatalogError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        Self::Csv {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Errors reading the shared settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
