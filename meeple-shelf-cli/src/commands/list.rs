use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use meeple_shelf_catalog::{CatalogEntry, CategoryFilter, SortKey, filter_and_sort};

use crate::CliError;
use crate::cli_types::{QueryArgs, ViewMode};

use super::{LoadedCatalog, games};

/// Reject sorts the active pipeline does not offer, listing the ones it does.
fn check_sort(sort: SortKey, ratings: bool) -> Result<(), CliError> {
    let available = SortKey::available(ratings);
    if available.contains(&sort) {
        return Ok(());
    }
    let offered = available
        .iter()
        .map(|key| format!("{key} ({})", key.label()))
        .collect::<Vec<_>>()
        .join(", ");
    Err(CliError::unsupported_sort(format!(
        "'{sort}' is not available for this collection; choose one of: {offered}"
    )))
}

pub(crate) fn run_list(
    catalog: &LoadedCatalog,
    query: QueryArgs,
    view: ViewMode,
    json: bool,
) -> Result<(), CliError> {
    check_sort(query.sort, catalog.config.ratings)?;

    let filter = match query.item_type {
        Some(item_type) => CategoryFilter::item_type(item_type),
        None => CategoryFilter::tags(query.tags),
    };
    let results = filter_and_sort(&catalog.entries, &query.search, &filter, query.sort);

    if json {
        let out = serde_json::to_string_pretty(&results)
            .map_err(|e| CliError::other(format!("Failed to serialize entries: {e}")))?;
        println!("{out}");
        return Ok(());
    }

    log::info!(
        "{}",
        format!("{} {} found", results.len(), games(results.len()))
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    if results.is_empty() {
        log::warn!("No games match this combination of filters.");
        return Ok(());
    }
    crate::log_blank();

    for entry in results {
        match view {
            ViewMode::Cards => print_card(entry),
            ViewMode::List => print_line(entry),
        }
    }

    Ok(())
}

fn title(entry: &CatalogEntry) -> String {
    match entry.rating_emoji {
        Some(emoji) => format!("{emoji} {}", entry.name),
        None => entry.name.clone(),
    }
}

fn print_card(entry: &CatalogEntry) {
    log::info!("{}", title(entry).if_supports_color(Stdout, |t| t.bold()));

    let mut meta = Vec::new();
    if let Some(rating) = &entry.rating_display {
        meta.push(format!("Rating: {rating}"));
    }
    meta.push(format!("Time: {}", entry.playtime_display));
    meta.push(format!("Players: {}", entry.players_display));
    meta.push(format!("Type: {}", entry.item_type));
    if let Some(year) = entry.year_published {
        meta.push(format!("Year: {year}"));
    }
    log::info!("  {}", meta.join(" · "));
    log::info!(
        "  {}",
        entry.description.if_supports_color(Stdout, |t| t.italic())
    );

    if !entry.tags.is_empty() {
        let chips: Vec<String> = entry
            .tags
            .iter()
            .map(|t| format!("[{t}]").if_supports_color(Stdout, |s| s.cyan()).to_string())
            .collect();
        log::info!("  {}", chips.join(" "));
    }
    crate::log_blank();
}

fn print_line(entry: &CatalogEntry) {
    log::info!(
        "{} {}",
        title(entry).if_supports_color(Stdout, |t| t.bold()),
        format!("#{}", entry.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
}
