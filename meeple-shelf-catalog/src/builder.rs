//! Catalog building: source table → ordered entries.

use std::path::Path;

use crate::coerce;
use crate::config::PipelineConfig;
use crate::entry::{CatalogEntry, build_entry};
use crate::error::CatalogError;
use crate::source::{SourceTable, read_source};

/// Load `path` and map every owned row to an entry, in source order.
pub fn build_catalog(path: &Path, config: &PipelineConfig) -> Result<Vec<CatalogEntry>, CatalogError> {
    let table = read_source(path)?;
    let entries = build_from_table(table, config);
    log::debug!("Built {} catalog entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Map an already loaded table.
///
/// When the table has an `own` column only owned rows are processed. Rows the
/// mapper rejects are dropped; the rest keep their relative order.
pub fn build_from_table(table: SourceTable, config: &PipelineConfig) -> Vec<CatalogEntry> {
    let has_own_column = table.has_own_column;
    table
        .rows
        .iter()
        .filter(|row| !has_own_column || coerce::is_owned(row))
        .enumerate()
        .filter_map(|(i, row)| build_entry(row, i + 1, config))
        .collect()
}
