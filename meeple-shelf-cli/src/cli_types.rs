//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use meeple_shelf_catalog::SortKey;

#[derive(Parser)]
#[command(name = "meeple-shelf")]
#[command(about = "Browse a board game collection export", long_about = None)]
pub(crate) struct Cli {
    /// Collection CSV/TSV file (defaults to the saved setting, then ./collection.csv)
    #[arg(short, long, global = true)]
    pub collection: Option<PathBuf>,

    /// Ignore ratings: synthetic ids for rows without one, item type as a tag
    #[arg(long, global = true)]
    pub plain: bool,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Search, filter and sort options shared by commands that list games.
#[derive(Args, Clone)]
pub(crate) struct QueryArgs {
    /// Text matched against names, descriptions and tags (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Only games carrying every listed tag (e.g., "quick,2 players")
    #[arg(short, long, value_delimiter = ',', conflicts_with = "item_type")]
    pub tags: Vec<String>,

    /// Only games of this type (e.g., "base game", "expansion", or "all")
    #[arg(long = "type")]
    pub item_type: Option<String>,

    /// Sort order: name-asc, name-desc, rating-desc, rating-asc
    #[arg(long, default_value = "name-asc")]
    pub sort: SortKey,
}

/// How `list` renders each game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum ViewMode {
    /// Full card: details, description and tags
    #[default]
    Cards,
    /// Names only
    List,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List games matching a search and filters
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// Output layout
        #[arg(long, value_enum, default_value_t = ViewMode::Cards)]
        view: ViewMode,

        /// Print matching entries as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// List every tag in the collection with its game count
    Tags,

    /// Show collection statistics
    Stats,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and the effective collection path
    Show,

    /// Print the settings file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_list_query() {
        let cli = Cli::try_parse_from([
            "meeple-shelf",
            "list",
            "--tags",
            "quick,2 players",
            "--sort",
            "rating-desc",
            "--view",
            "list",
        ])
        .unwrap();

        match cli.command {
            Commands::List { query, view, json } => {
                assert_eq!(query.tags, vec!["quick", "2 players"]);
                assert_eq!(query.sort, SortKey::RatingDesc);
                assert_eq!(query.item_type, None);
                assert_eq!(view, ViewMode::List);
                assert!(!json);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn list_defaults() {
        let cli = Cli::try_parse_from(["meeple-shelf", "list"]).unwrap();
        match cli.command {
            Commands::List { query, view, .. } => {
                assert!(query.search.is_empty());
                assert!(query.tags.is_empty());
                assert_eq!(query.sort, SortKey::NameAsc);
                assert_eq!(view, ViewMode::Cards);
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn tags_and_type_are_exclusive() {
        let result = Cli::try_parse_from([
            "meeple-shelf",
            "list",
            "--tags",
            "quick",
            "--type",
            "expansion",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_sort_rejected() {
        assert!(Cli::try_parse_from(["meeple-shelf", "list", "--sort", "stars"]).is_err());
    }
}
