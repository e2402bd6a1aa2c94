//! meeple-shelf CLI
//!
//! Command-line browser for a board game collection export.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref());

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::List { query, view, json } => {
            let catalog = commands::load_catalog(cli.collection, cli.plain)?;
            commands::list::run_list(&catalog, query, view, json)
        }
        Commands::Tags => {
            let catalog = commands::load_catalog(cli.collection, cli.plain)?;
            commands::tags::run_tags(&catalog);
            Ok(())
        }
        Commands::Stats => {
            let catalog = commands::load_catalog(cli.collection, cli.plain)?;
            commands::stats::run_stats(&catalog);
            Ok(())
        }
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => commands::config::run_config_show(cli.collection),
                ConfigAction::Path => commands::config::run_config_path(),
            }
            Ok(())
        }
    }
}
