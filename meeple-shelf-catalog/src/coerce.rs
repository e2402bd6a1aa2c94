//! Best-effort field coercion.
//!
//! Every function here is total: a cell that is missing, blank or not a
//! number degrades to a documented fallback ("—", 0, an empty label) instead
//! of failing.

use crate::config::ItemTypeTable;
use crate::source::{Column, SourceRow};

/// Shown wherever a value could not be derived.
pub const PLACEHOLDER: &str = "—";

/// Language-dependence phrases, checked in order against the lowercased text.
const LANGUAGE_LABELS: &[(&str, &str)] = &[
    ("no necessary", "independent of language"),
    ("some ", "some text"),
    ("moderate", "moderate text"),
    ("extensive", "heavy text"),
];

/// Rating tiers, checked in order; the first threshold the rating reaches wins.
const EMOJI_TIERS: &[(f64, &str)] = &[(9.0, "🌟"), (8.0, "⭐"), (7.0, "✨")];
const BASE_TIER_EMOJI: &str = "💗";

/// Read a cell as an integer.
///
/// Decimal text is truncated toward zero, so `"4.0"` (how spreadsheet tools
/// often write integer columns with gaps) reads as 4.
pub fn int_value(raw: Option<&str>) -> Option<i64> {
    let s = raw?.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f.abs() < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

/// Read a cell as a finite float.
pub fn float_value(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Read a cell as non-blank trimmed text.
pub fn text_value(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// `"3"` when min equals max, `"3–4"` otherwise, `"—"` if either is unreadable.
pub fn format_players(row: &SourceRow) -> String {
    let min = int_value(row.get(Column::MinPlayers));
    let max = int_value(row.get(Column::MaxPlayers));
    match (min, max) {
        (Some(min), Some(max)) if min == max => format!("{min}"),
        (Some(min), Some(max)) => format!("{min}–{max}"),
        _ => PLACEHOLDER.to_string(),
    }
}

/// First strictly positive value of `playingtime`, `minplaytime`,
/// `maxplaytime`, in that order; 0 if none.
pub fn pick_playtime_value(row: &SourceRow) -> i64 {
    [Column::PlayingTime, Column::MinPlaytime, Column::MaxPlaytime]
        .into_iter()
        .filter_map(|c| int_value(row.get(c)))
        .find(|v| *v > 0)
        .unwrap_or(0)
}

/// `"30–60 min"` for a real range, otherwise `"45 min"` from
/// [`pick_playtime_value`], or `"—"`.
pub fn format_playtime(row: &SourceRow) -> String {
    let min = int_value(row.get(Column::MinPlaytime));
    let max = int_value(row.get(Column::MaxPlaytime));
    if let (Some(min), Some(max)) = (min, max) {
        if min > 0 && max > 0 && min != max {
            return format!("{min}–{max} min");
        }
    }
    match pick_playtime_value(row) {
        0 => PLACEHOLDER.to_string(),
        v => format!("{v} min"),
    }
}

/// Map an item type code to its display label via `table`.
pub fn normalize_item_type(raw: Option<&str>, table: &ItemTypeTable) -> String {
    let Some(code) = text_value(raw) else {
        return table.unknown_label.clone();
    };
    match table.lookup(code) {
        Some(label) => label.to_string(),
        None if table.passthrough_unrecognized => capitalize(code),
        None => table.unknown_label.clone(),
    }
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Label for a BGG language-dependence description, or `""` if none applies.
///
/// Text matching several phrases gets the first one in priority order.
pub fn normalize_language_dependence(raw: Option<&str>) -> &'static str {
    let Some(text) = raw else {
        return "";
    };
    let text = text.to_lowercase();
    LANGUAGE_LABELS
        .iter()
        .find(|(needle, _)| text.contains(needle))
        .map(|(_, label)| *label)
        .unwrap_or("")
}

/// Personal rating to one decimal if positive, else the community average to
/// two decimals if positive, else `"—"`.
pub fn compute_rating_display(row: &SourceRow) -> String {
    if let Some(r) = float_value(row.get(Column::Rating)).filter(|r| *r > 0.0) {
        return format!("{r:.1}");
    }
    if let Some(a) = float_value(row.get(Column::Average)).filter(|a| *a > 0.0) {
        return format!("{a:.2}");
    }
    PLACEHOLDER.to_string()
}

/// Numeric value of a rating display; `None` for the placeholder.
pub fn parse_rating(display: &str) -> Option<f64> {
    float_value(Some(display))
}

/// Decoration for a rating display, or `None` below the base tier.
pub fn rating_emoji(display: &str) -> Option<&'static str> {
    let rating = parse_rating(display)?;
    EMOJI_TIERS
        .iter()
        .find(|(threshold, _)| rating >= *threshold)
        .map(|(_, emoji)| *emoji)
        .or((rating > 0.0).then_some(BASE_TIER_EMOJI))
}

/// Whether the row's `own` flag marks it as part of the collection.
pub fn is_owned(row: &SourceRow) -> bool {
    let Some(flag) = text_value(row.get(Column::Own)) else {
        return false;
    };
    if let Some(v) = float_value(Some(flag)) {
        return v == 1.0;
    }
    matches!(flag.to_ascii_lowercase().as_str(), "true" | "yes")
}
