use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use meeple_shelf_catalog::query::tag_counts;

use super::{LoadedCatalog, games};

pub(crate) fn run_tags(catalog: &LoadedCatalog) {
    let counts = tag_counts(&catalog.entries);
    if counts.is_empty() {
        log::info!("No tags in {}", catalog.path.display());
        return;
    }

    let width = counts.keys().map(|t| t.chars().count()).max().unwrap_or(0);
    for (tag, count) in counts {
        let pad = width - tag.chars().count();
        log::info!(
            "  {}{}  {:>5} {}",
            tag.if_supports_color(Stdout, |t| t.cyan()),
            " ".repeat(pad),
            count,
            games(count),
        );
    }
}
