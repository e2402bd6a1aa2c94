use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use meeple_shelf_catalog::settings::{load_settings_string, resolve_collection_path, settings_path};

use super::settings_or_default;

pub(crate) fn run_config_show(collection: Option<PathBuf>) {
    let path = settings_path();
    log::info!(
        "{} {}",
        "Settings file:".if_supports_color(Stdout, |t| t.bold()),
        path.display()
    );

    match load_settings_string() {
        Some(contents) => {
            crate::log_blank();
            for line in contents.lines() {
                log::info!("  {line}");
            }
        }
        None => log::info!("  (not present, using defaults)"),
    }

    crate::log_blank();
    let settings = settings_or_default();
    let collection = resolve_collection_path(collection, &settings);
    log::info!(
        "{} {}{}",
        "Collection:".if_supports_color(Stdout, |t| t.bold()),
        collection.display(),
        if collection.is_file() {
            String::new()
        } else {
            format!(" {}", "(missing)".if_supports_color(Stdout, |t| t.red()))
        },
    );
    log::info!(
        "{} {}",
        "Ratings:".if_supports_color(Stdout, |t| t.bold()),
        if settings.pipeline.ratings { "on" } else { "off" },
    );
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
