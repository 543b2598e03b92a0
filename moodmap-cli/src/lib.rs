//! Command-line interface for the moodmap place finder.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use log::debug;
use moodmap_core::{Coordinate, FixedLocation, Session};
use moodmap_data::FileKeyValueStore;

mod error;
mod favorites;
mod history;
mod render;
mod search;
mod services;

pub use error::CliError;

use favorites::{FavoritesArgs, run_favorites};
use history::{HistoryArgs, run_history};
use search::{SearchArgs, run_search};

const ARG_MOOD: &str = "mood";
const ARG_BUDGET: &str = "budget";
const ARG_LAT: &str = "lat";
const ARG_LON: &str = "lon";
const ARG_DATA_DIR: &str = "data-dir";
const ARG_FAVORITE: &str = "favorite";
const ARG_DETAILS: &str = "details";
const ARG_FROM_HISTORY: &str = "from-history";
const ARG_JSON: &str = "json";
const ARG_OVERPASS_URL: &str = "overpass-url";
const ARG_OSRM_URL: &str = "osrm-url";
const ARG_NOMINATIM_URL: &str = "nominatim-url";
const ARG_REMOVE: &str = "remove";
const ARG_CLEAR: &str = "clear";
const ENV_SEARCH_MOOD: &str = "MOODMAP_CMDS_SEARCH_MOOD";
const ENV_SEARCH_BUDGET: &str = "MOODMAP_CMDS_SEARCH_BUDGET";
const ENV_SEARCH_LAT: &str = "MOODMAP_CMDS_SEARCH_LAT";
const ENV_SEARCH_LON: &str = "MOODMAP_CMDS_SEARCH_LON";

/// Run the moodmap CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Search(args) => run_search(args),
        Command::Favorites(args) => run_favorites(args),
        Command::History(args) => run_history(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "moodmap",
    about = "Find nearby places that match a mood and a budget",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search for places around a location.
    Search(SearchArgs),
    /// List or edit saved favourites.
    Favorites(FavoritesArgs),
    /// List or edit the search history.
    History(HistoryArgs),
}

/// Open a logged-in session over the store in `data_dir`, optionally
/// pinned to `location`.
fn open_session(
    data_dir: &Utf8Path,
    location: Option<Coordinate>,
) -> Result<Session<FileKeyValueStore>, CliError> {
    debug!("opening session data in {data_dir}");
    let mut session = Session::new(FileKeyValueStore::new(data_dir.to_path_buf()));
    session.go_to_login()?;
    session.login()?;
    if let Some(location) = location {
        session.locate(&FixedLocation(location))?;
    }
    Ok(session)
}

/// Convert a 1-based position option into an index.
fn zero_based(field: &'static str, position: usize) -> Result<usize, CliError> {
    position
        .checked_sub(1)
        .ok_or(CliError::ZeroPosition { field })
}

#[cfg(test)]
mod tests;
