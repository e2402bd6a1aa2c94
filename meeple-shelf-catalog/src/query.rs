//! Filtering and sorting over a built catalog.
//!
//! Every call is a full pass over the entry list; nothing here is cached or
//! mutated.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entry::CatalogEntry;

/// Type selection meaning "no type filter".
pub const ALL_TYPES: &str = "all";

/// Sort key for unrated entries; below any real rating.
const UNRATED: f64 = -1.0;

/// Sort order for query results. All sorts are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    RatingDesc,
    RatingAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        Self::NameAsc,
        Self::NameDesc,
        Self::RatingDesc,
        Self::RatingAsc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::RatingDesc => "rating-desc",
            Self::RatingAsc => "rating-asc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NameAsc => "Name (A–Z)",
            Self::NameDesc => "Name (Z–A)",
            Self::RatingDesc => "Rating (high → low)",
            Self::RatingAsc => "Rating (low → high)",
        }
    }

    const NAME_ONLY: &'static [SortKey] = &[Self::NameAsc, Self::NameDesc];

    /// Sorts offered for a pipeline with or without ratings.
    pub fn available(ratings: bool) -> &'static [SortKey] {
        if ratings { &Self::ALL } else { Self::NAME_ONLY }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown sort '{s}' (expected one of: {})", names.join(", "))
            })
    }
}

/// Category filter: either every selected tag must be present, or the item
/// type must match exactly. The two modes are exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    Any,
    Tags(Vec<String>),
    ItemType(String),
}

impl CategoryFilter {
    /// Tag filter; an empty selection filters nothing.
    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        if tags.is_empty() { Self::Any } else { Self::Tags(tags) }
    }

    /// Type filter; [`ALL_TYPES`] filters nothing.
    pub fn item_type(selection: impl Into<String>) -> Self {
        let selection = selection.into();
        if selection == ALL_TYPES {
            Self::Any
        } else {
            Self::ItemType(selection)
        }
    }

    fn matches(&self, entry: &CatalogEntry) -> bool {
        match self {
            Self::Any => true,
            Self::Tags(tags) => tags.iter().all(|t| entry.has_tag(t)),
            Self::ItemType(item_type) => entry.item_type == *item_type,
        }
    }
}

/// Case-insensitive substring match against name, description or any tag.
/// A blank search matches everything.
pub fn matches_search(entry: &CatalogEntry, search: &str) -> bool {
    if search.trim().is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    entry.name.to_lowercase().contains(&needle)
        || entry.description.to_lowercase().contains(&needle)
        || entry.tags.iter().any(|t| t.to_lowercase().contains(&needle))
}

/// Entries passing both the search and the category filter, in catalog order.
pub fn filter_entries<'a>(
    entries: &'a [CatalogEntry],
    search: &str,
    filter: &CategoryFilter,
) -> Vec<&'a CatalogEntry> {
    entries
        .iter()
        .filter(|e| filter.matches(e) && matches_search(e, search))
        .collect()
}

/// [`filter_entries`], ordered by `sort`. Ties keep catalog order.
pub fn filter_and_sort<'a>(
    entries: &'a [CatalogEntry],
    search: &str,
    filter: &CategoryFilter,
    sort: SortKey,
) -> Vec<&'a CatalogEntry> {
    let mut results = filter_entries(entries, search, filter);

    match sort {
        SortKey::NameAsc => results.sort_by_cached_key(|e| e.name.to_lowercase()),
        SortKey::NameDesc => {
            results.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()))
        }
        SortKey::RatingDesc => results.sort_by(|a, b| rating_key(b).total_cmp(&rating_key(a))),
        SortKey::RatingAsc => results.sort_by(|a, b| rating_key(a).total_cmp(&rating_key(b))),
    }

    results
}

fn rating_key(entry: &CatalogEntry) -> f64 {
    entry.rating_value().unwrap_or(UNRATED)
}

/// How many entries carry each tag.
pub fn tag_counts(entries: &[CatalogEntry]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for tag in entries.iter().flat_map(|e| e.tags.iter()) {
        *counts.entry(tag.as_str()).or_insert(0) += 1;
    }
    counts
}

/// How many entries have each item type.
pub fn item_type_counts(entries: &[CatalogEntry]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.item_type.as_str()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, name: &str, rating: Option<&str>, item_type: &str, tags: &[&str]) -> CatalogEntry {
        CatalogEntry {
            id,
            name: name.to_string(),
            rating_display: rating.map(str::to_string),
            rating_emoji: None,
            playtime_display: "—".to_string(),
            players_display: "—".to_string(),
            item_type: item_type.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: format!("{name} ({item_type})"),
            year_published: None,
            plays: 0,
        }
    }

    fn shelf() -> Vec<CatalogEntry> {
        vec![
            entry(1, "Wingspan", Some("8.1"), "base game", &["up to 4", "long", "favorite"]),
            entry(2, "azul", Some("7.5"), "base game", &["up to 4", "medium", "well rated"]),
            entry(3, "Catan: Seafarers", Some("—"), "expansion", &["up to 4", "long"]),
            entry(4, "Hanabi", Some("7.5"), "base game", &["up to 4", "quick", "well rated"]),
            entry(5, "Patchwork", Some("8.1"), "base game", &["2 players", "medium", "favorite"]),
        ]
    }

    fn ids(results: &[&CatalogEntry]) -> Vec<i64> {
        results.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_no_filter_returns_catalog_unchanged() {
        let entries = shelf();
        let results = filter_entries(&entries, "", &CategoryFilter::Any);
        assert_eq!(ids(&results), vec![1, 2, 3, 4, 5]);

        let no_tags = CategoryFilter::tags(Vec::<String>::new());
        let results = filter_entries(&entries, "   ", &no_tags);
        assert_eq!(ids(&results), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_tags_are_and_filter() {
        let entries = shelf();
        let filter = CategoryFilter::tags(["up to 4", "well rated"]);
        let results = filter_and_sort(&entries, "", &filter, SortKey::NameAsc);
        assert_eq!(ids(&results), vec![2, 4]);

        let filter = CategoryFilter::tags(["2 players", "long"]);
        assert!(filter_and_sort(&entries, "", &filter, SortKey::NameAsc).is_empty());
    }

    #[test]
    fn test_item_type_filter() {
        let entries = shelf();
        let results = filter_and_sort(
            &entries,
            "",
            &CategoryFilter::item_type("expansion"),
            SortKey::NameAsc,
        );
        assert_eq!(ids(&results), vec![3]);

        assert_eq!(CategoryFilter::item_type(ALL_TYPES), CategoryFilter::Any);
    }

    #[test]
    fn test_search_name_description_and_tags() {
        let entries = shelf();
        let by_name = filter_and_sort(&entries, "WING", &CategoryFilter::Any, SortKey::NameAsc);
        assert_eq!(ids(&by_name), vec![1]);

        let by_description = filter_and_sort(&entries, "(expansion)", &CategoryFilter::Any, SortKey::NameAsc);
        assert_eq!(ids(&by_description), vec![3]);

        let by_tag = filter_and_sort(&entries, "quick", &CategoryFilter::Any, SortKey::NameAsc);
        assert_eq!(ids(&by_tag), vec![4]);
    }

    #[test]
    fn test_name_sorts_are_case_insensitive_and_reversed() {
        let entries = shelf();
        let asc = ids(&filter_and_sort(&entries, "", &CategoryFilter::Any, SortKey::NameAsc));
        assert_eq!(asc, vec![2, 3, 4, 5, 1]);

        let mut desc = ids(&filter_and_sort(&entries, "", &CategoryFilter::Any, SortKey::NameDesc));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_name_asc_keeps_order_for_case_ties() {
        let entries = vec![
            entry(1, "Azul", None, "x", &[]),
            entry(2, "azul", None, "x", &[]),
            entry(3, "Brass", None, "x", &[]),
        ];
        let results = filter_and_sort(&entries, "", &CategoryFilter::Any, SortKey::NameAsc);
        assert_eq!(ids(&results), vec![1, 2, 3]);

        let swapped = vec![entries[1].clone(), entries[0].clone(), entries[2].clone()];
        let results = filter_and_sort(&swapped, "", &CategoryFilter::Any, SortKey::NameAsc);
        assert_eq!(ids(&results), vec![2, 1, 3]);
    }

    #[test]
    fn test_name_desc_keeps_order_for_case_ties() {
        let entries = vec![
            entry(1, "Azul", None, "x", &[]),
            entry(2, "azul", None, "x", &[]),
            entry(3, "Brass", None, "x", &[]),
        ];
        let results = filter_and_sort(&entries, "", &CategoryFilter::Any, SortKey::NameDesc);
        assert_eq!(ids(&results), vec![3, 1, 2]);
    }

    #[test]
    fn test_rating_sorts_are_stable() {
        let entries = shelf();
        let desc = filter_and_sort(&entries, "", &CategoryFilter::Any, SortKey::RatingDesc);
        assert_eq!(ids(&desc), vec![1, 5, 2, 4, 3]);

        let asc = filter_and_sort(&entries, "", &CategoryFilter::Any, SortKey::RatingAsc);
        assert_eq!(ids(&asc), vec![3, 2, 4, 1, 5]);
    }

    #[test]
    fn test_rating_sort_without_ratings_keeps_order() {
        let entries = vec![
            entry(1, "B", None, "x", &[]),
            entry(2, "A", None, "x", &[]),
        ];
        let results = filter_and_sort(&entries, "", &CategoryFilter::Any, SortKey::RatingDesc);
        assert_eq!(ids(&results), vec![1, 2]);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("rating-desc".parse::<SortKey>(), Ok(SortKey::RatingDesc));
        assert_eq!("NAME-ASC".parse::<SortKey>(), Ok(SortKey::NameAsc));
        assert!("stars".parse::<SortKey>().is_err());
        assert_eq!(SortKey::available(false), &[SortKey::NameAsc, SortKey::NameDesc]);
        assert_eq!(SortKey::available(true).len(), 4);
    }

    #[test]
    fn test_tag_lists() {
        let entries = shelf();
        let counts = tag_counts(&entries);
        assert_eq!(counts["up to 4"], 4);
        assert_eq!(counts["quick"], 1);
        assert_eq!(
            counts.keys().copied().collect::<Vec<_>>(),
            vec!["2 players", "favorite", "long", "medium", "quick", "up to 4", "well rated"]
        );

        let types = item_type_counts(&entries);
        assert_eq!(types["base game"], 4);
        assert_eq!(types["expansion"], 1);
    }
}
