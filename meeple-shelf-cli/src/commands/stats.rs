use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use meeple_shelf_catalog::query::item_type_counts;

use super::LoadedCatalog;

pub(crate) fn run_stats(catalog: &LoadedCatalog) {
    let entries = &catalog.entries;

    log::info!(
        "{}",
        "Collection Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Source: {}", catalog.path.display());
    crate::log_blank();
    log::info!("  Games:          {:>8}", entries.len());
    for (item_type, count) in item_type_counts(entries) {
        log::info!("    {:<14}{:>8}", item_type, count);
    }

    if catalog.config.ratings {
        let rated: Vec<f64> = entries.iter().filter_map(|e| e.rating_value()).collect();
        log::info!("  Rated:          {:>8}", rated.len());
        log::info!(
            "  Favorites:      {:>8}",
            entries.iter().filter(|e| e.has_tag("favorite")).count()
        );
        if !rated.is_empty() {
            let mean = rated.iter().sum::<f64>() / rated.len() as f64;
            log::info!("  Mean rating:    {:>8.2}", mean);
        }
    }

    let plays: u64 = entries.iter().map(|e| e.plays).sum();
    log::info!("  Logged plays:   {:>8}", plays);
}
