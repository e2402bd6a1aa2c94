//! Row-to-entry mapping.
//!
//! Turns one [`SourceRow`] into a display-ready [`CatalogEntry`]: formatted
//! player count and playtime, normalized item type, tags and a description.

use serde::Serialize;

use crate::coerce::{self, PLACEHOLDER};
use crate::config::{IdPolicy, PipelineConfig, TagSource};
use crate::source::{Column, SourceRow};

/// Maximum description length, in characters, including the ellipsis.
pub const DESCRIPTION_LIMIT: usize = 240;

const ELLIPSIS: &str = "…";

/// A display-ready catalog record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: i64,
    pub name: String,
    /// `None` when the pipeline runs without ratings.
    pub rating_display: Option<String>,
    pub rating_emoji: Option<&'static str>,
    pub playtime_display: String,
    pub players_display: String,
    pub item_type: String,
    /// Unique, in generation order.
    pub tags: Vec<String>,
    pub description: String,
    pub year_published: Option<i64>,
    pub plays: u64,
}

impl CatalogEntry {
    /// Numeric rating, if the entry has one.
    pub fn rating_value(&self) -> Option<f64> {
        self.rating_display.as_deref().and_then(coerce::parse_rating)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Map a row to an entry.
///
/// `position` is the 1-based index of the row among the rows processed in
/// this build; it only matters when the id policy is synthetic. Returns
/// `None` for rows without a usable id under [`IdPolicy::Skip`].
pub fn build_entry(row: &SourceRow, position: usize, config: &PipelineConfig) -> Option<CatalogEntry> {
    let id = match (coerce::int_value(row.get(Column::ObjectId)), config.id_fallback) {
        (Some(id), _) => id,
        (None, IdPolicy::Synthetic { base }) => {
            let position = i64::try_from(position).unwrap_or(i64::MAX);
            match base.checked_add(position) {
                Some(id) => id,
                None => {
                    log::warn!("Skipping row {position}: synthetic id overflows (base {base})");
                    return None;
                }
            }
        }
        (None, IdPolicy::Skip) => {
            log::debug!("Skipping row {position}: no usable objectid");
            return None;
        }
    };

    let rating_display = config.ratings.then(|| coerce::compute_rating_display(row));
    let rating_emoji = rating_display.as_deref().and_then(coerce::rating_emoji);
    let item_type = coerce::normalize_item_type(row.get(Column::ItemType), &config.item_types);
    let tags = generate_tags(row, rating_display.as_deref(), &item_type, config.tag_source);
    let description = generate_description(row, rating_display.as_deref(), &item_type);

    Some(CatalogEntry {
        id,
        name: coerce::text_value(row.get(Column::ObjectName))
            .unwrap_or("")
            .to_string(),
        rating_emoji,
        rating_display,
        playtime_display: coerce::format_playtime(row),
        players_display: coerce::format_players(row),
        item_type,
        tags,
        description,
        year_published: coerce::int_value(row.get(Column::YearPublished)).filter(|y| *y != 0),
        plays: coerce::int_value(row.get(Column::NumPlays))
            .map_or(0, |n| n.max(0) as u64),
    })
}

fn players_tag(max: i64) -> &'static str {
    match max {
        1 => "solo",
        2 => "2 players",
        m if m <= 4 => "up to 4",
        m if m <= 6 => "up to 6",
        _ => "groups",
    }
}

fn playtime_tag(minutes: i64) -> Option<&'static str> {
    match minutes {
        m if m <= 0 => None,
        m if m <= 30 => Some("quick"),
        m if m <= 60 => Some("medium"),
        _ => Some("long"),
    }
}

fn rating_tag(rating: f64) -> Option<&'static str> {
    if rating >= 8.0 {
        Some("favorite")
    } else if rating >= 7.0 {
        Some("well rated")
    } else {
        None
    }
}

/// Tags in fixed order: players, playtime, language, then either the rating
/// tag or the item type. Duplicates keep their first position.
fn generate_tags(
    row: &SourceRow,
    rating_display: Option<&str>,
    item_type: &str,
    source: TagSource,
) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut push = |tag: &str| {
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    };

    if let Some(max) = coerce::int_value(row.get(Column::MaxPlayers)) {
        push(players_tag(max));
    }
    if let Some(tag) = playtime_tag(coerce::pick_playtime_value(row)) {
        push(tag);
    }
    push(coerce::normalize_language_dependence(
        row.get(Column::LanguageDependence),
    ));

    match source {
        TagSource::Rating => {
            if let Some(tag) = rating_display.and_then(coerce::parse_rating).and_then(rating_tag) {
                push(tag);
            }
        }
        TagSource::ItemType => push(item_type),
    }

    tags
}

/// The row's comment if it has one, otherwise a synthesized sentence.
/// Always fits in [`DESCRIPTION_LIMIT`].
fn generate_description(row: &SourceRow, rating_display: Option<&str>, item_type: &str) -> String {
    if let Some(comment) = coerce::text_value(row.get(Column::Comment)) {
        if comment.chars().count() <= DESCRIPTION_LIMIT {
            return comment.to_string();
        }
        return shorten(comment, DESCRIPTION_LIMIT);
    }

    let name = coerce::text_value(row.get(Column::ObjectName)).unwrap_or("");
    let mut text = format!(
        "{name} is a {}, for {} players, averaging {}.",
        item_type.to_lowercase(),
        coerce::format_players(row),
        coerce::format_playtime(row),
    );
    if let Some(rating) = rating_display.filter(|r| *r != PLACEHOLDER) {
        text.push_str(&format!(" Current rating: {rating}."));
    }
    shorten(&text, DESCRIPTION_LIMIT)
}

/// Collapse whitespace and fit `text` into `width` characters.
///
/// Overlong text keeps whole words up to the point where the ellipsis still
/// fits. If not even the first word fits, the result is the ellipsis alone.
pub fn shorten(text: &str, width: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= width {
        return collapsed;
    }

    let budget = width.saturating_sub(ELLIPSIS.chars().count());
    let mut out = String::new();
    let mut len = 0;
    for word in collapsed.split(' ') {
        let needed = word.chars().count() + usize::from(!out.is_empty());
        if len + needed > budget {
            break;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
        len += needed;
    }
    out.push_str(ELLIPSIS);
    out
}
