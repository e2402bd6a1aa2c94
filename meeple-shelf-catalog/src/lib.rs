//! Board game collection catalog.
//!
//! Loads a BoardGameGeek-style collection export, derives display fields for
//! every owned game (player range, playtime, tags, rating, description) and
//! answers search/filter/sort queries over the result.

pub mod builder;
pub mod cache;
pub mod coerce;
pub mod config;
pub mod entry;
pub mod error;
pub mod query;
pub mod settings;
pub mod source;

pub use builder::{build_catalog, build_from_table};
pub use cache::CatalogCache;
pub use config::{IdPolicy, ItemTypeRule, ItemTypeTable, PipelineConfig, TagSource};
pub use entry::{CatalogEntry, build_entry};
pub use error::{CatalogError, SettingsError};
pub use query::{ALL_TYPES, CategoryFilter, SortKey, filter_and_sort, filter_entries};
pub use source::{Column, SourceRow, SourceTable};
