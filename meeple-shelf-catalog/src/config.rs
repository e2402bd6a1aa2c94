//! Pipeline configuration.
//!
//! One configurable pipeline covers both catalog flavours: the ratings-aware
//! one (rating display, rating tags and rating sorts) and the ratings-free one
//! (synthetic ids, item type as a tag). Everything here is plain data and can
//! be read from the `[pipeline]` table of the settings file.

use serde::{Deserialize, Serialize};

/// What to do with a row whose `objectid` cannot be read as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IdPolicy {
    /// Drop the row.
    #[default]
    Skip,
    /// Assign `base + position`, where position is the 1-based index of the
    /// row among the rows processed in this build.
    Synthetic { base: i64 },
}

/// Which source feeds the last tag slot of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagSource {
    /// "favorite" / "well rated", derived from the rating display.
    #[default]
    Rating,
    /// The normalized item type label.
    ItemType,
}

/// A single `code → label` mapping for item types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTypeRule {
    pub code: String,
    pub label: String,
}

impl ItemTypeRule {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Table-driven item type normalization.
///
/// Codes are matched case-insensitively after trimming. Adding a code is a
/// data change; no call site needs to know about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemTypeTable {
    pub rules: Vec<ItemTypeRule>,
    /// Label used for blank values, and for unrecognized ones unless
    /// `passthrough_unrecognized` is set.
    pub unknown_label: String,
    /// Pass unrecognized non-empty codes through, capitalized.
    pub passthrough_unrecognized: bool,
}

impl Default for ItemTypeTable {
    fn default() -> Self {
        Self {
            rules: vec![
                ItemTypeRule::new("standalone", "base game"),
                ItemTypeRule::new("expansion", "expansion"),
            ],
            unknown_label: "unknown".to_string(),
            passthrough_unrecognized: false,
        }
    }
}

impl ItemTypeTable {
    pub fn lookup(&self, code: &str) -> Option<&str> {
        let code = code.trim();
        self.rules
            .iter()
            .find(|r| r.code.eq_ignore_ascii_case(code))
            .map(|r| r.label.as_str())
    }
}

/// Configuration for a catalog build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub id_fallback: IdPolicy,
    /// Whether the rating columns are read at all.
    pub ratings: bool,
    pub tag_source: TagSource,
    pub item_types: ItemTypeTable,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::ratings_aware()
    }
}

impl PipelineConfig {
    /// Base for synthetic ids in the ratings-free preset.
    pub const DEFAULT_SYNTHETIC_ID_BASE: i64 = 10_000;

    /// Rows without an id are dropped; ratings drive the display, the last
    /// tag slot and the available sorts.
    pub fn ratings_aware() -> Self {
        Self {
            id_fallback: IdPolicy::Skip,
            ratings: true,
            tag_source: TagSource::Rating,
            item_types: ItemTypeTable::default(),
        }
    }

    /// No rating columns; missing ids get synthetic ones and the item type
    /// becomes a tag.
    pub fn ratings_free() -> Self {
        Self {
            id_fallback: IdPolicy::Synthetic {
                base: Self::DEFAULT_SYNTHETIC_ID_BASE,
            },
            ratings: false,
            tag_source: TagSource::ItemType,
            item_types: ItemTypeTable {
                passthrough_unrecognized: true,
                ..ItemTypeTable::default()
            },
        }
    }
}
