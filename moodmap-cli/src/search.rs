//! Search command implementation for the moodmap CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use moodmap_core::{
    Budget, Coordinate, Mood, PlaceDetails, RankedPlace, SearchOutcome, SearchQuery, Session,
};
use moodmap_data::{DEFAULT_DATA_DIR, FileKeyValueStore};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::render::{SavedFavorite, SearchReport, write_search_report};
use crate::services::{Endpoints, HttpServiceFactory, ServiceFactory};
use crate::{
    ARG_BUDGET, ARG_DATA_DIR, ARG_DETAILS, ARG_FAVORITE, ARG_FROM_HISTORY, ARG_JSON, ARG_LAT,
    ARG_LON, ARG_MOOD, ARG_NOMINATIM_URL, ARG_OSRM_URL, ARG_OVERPASS_URL, CliError,
    ENV_SEARCH_BUDGET, ENV_SEARCH_LAT, ENV_SEARCH_LON, ENV_SEARCH_MOOD, open_session, zero_based,
};

/// CLI arguments for the `search` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search OpenStreetMap for amenities matching a mood within \
                 3 km of a location, rank them against a budget and print \
                 the best six. Every search is recorded in the history. \
                 Optionally save one result as a favourite or show its \
                 driving route and address.",
    about = "Find places for a mood and budget"
)]
#[ortho_config(prefix = "MOODMAP")]
pub(crate) struct SearchArgs {
    /// Amenity to look for, e.g. `cafe` or `restaurant`.
    #[arg(long = ARG_MOOD, value_name = "amenity")]
    #[serde(default)]
    pub(crate) mood: Option<String>,
    /// Spending preference: `low`, `medium` or `high`.
    #[arg(long = ARG_BUDGET, value_name = "level")]
    #[serde(default)]
    pub(crate) budget: Option<String>,
    /// Latitude of the search centre.
    #[arg(long = ARG_LAT, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lat: Option<f64>,
    /// Longitude of the search centre.
    #[arg(long = ARG_LON, value_name = "degrees", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) lon: Option<f64>,
    /// Repeat the search at this position in the history (1 is newest)
    /// instead of using --mood and --budget.
    #[arg(long = ARG_FROM_HISTORY, value_name = "position")]
    #[serde(default)]
    pub(crate) from_history: Option<usize>,
    /// Save the result at this position (1 is best) as a favourite.
    #[arg(long = ARG_FAVORITE, value_name = "position")]
    #[serde(default)]
    pub(crate) favorite: Option<usize>,
    /// Show route and address for the result at this position.
    #[arg(long = ARG_DETAILS, value_name = "position")]
    #[serde(default)]
    pub(crate) details: Option<usize>,
    /// Print JSON instead of text.
    #[arg(long = ARG_JSON)]
    #[serde(default)]
    pub(crate) json: bool,
    /// Directory holding favourites and history.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
    /// Base URL of the Overpass API.
    #[arg(long = ARG_OVERPASS_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) overpass_url: Option<String>,
    /// Base URL of the OSRM routing server.
    #[arg(long = ARG_OSRM_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) osrm_url: Option<String>,
    /// Base URL of the Nominatim geocoder.
    #[arg(long = ARG_NOMINATIM_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) nominatim_url: Option<String>,
}

impl SearchArgs {
    pub(crate) fn into_config(self) -> Result<SearchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SearchConfig::try_from(merged)
    }
}

/// What to search for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SearchRequest {
    /// A new mood and budget.
    Fresh(SearchQuery),
    /// The history entry at this index.
    Replay(usize),
}

/// Resolved `search` command configuration. Positions are zero-based.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchConfig {
    pub(crate) request: SearchRequest,
    pub(crate) location: Coordinate,
    pub(crate) favorite: Option<usize>,
    pub(crate) details: Option<usize>,
    pub(crate) json: bool,
    pub(crate) data_dir: Utf8PathBuf,
    pub(crate) endpoints: Endpoints,
}

impl TryFrom<SearchArgs> for SearchConfig {
    type Error = CliError;

    fn try_from(args: SearchArgs) -> Result<Self, Self::Error> {
        let request = match args.from_history {
            Some(position) => SearchRequest::Replay(zero_based(ARG_FROM_HISTORY, position)?),
            None => SearchRequest::Fresh(fresh_query(args.mood, args.budget)?),
        };

        let lat = args.lat.ok_or(CliError::MissingArgument {
            field: ARG_LAT,
            env: ENV_SEARCH_LAT,
        })?;
        let lon = args.lon.ok_or(CliError::MissingArgument {
            field: ARG_LON,
            env: ENV_SEARCH_LON,
        })?;
        let location = Coordinate::new(lat, lon)?;

        let favorite = args
            .favorite
            .map(|position| zero_based(ARG_FAVORITE, position))
            .transpose()?;
        let details = args
            .details
            .map(|position| zero_based(ARG_DETAILS, position))
            .transpose()?;

        let defaults = Endpoints::default();
        let endpoints = Endpoints {
            overpass_url: args.overpass_url.unwrap_or(defaults.overpass_url),
            osrm_url: args.osrm_url.unwrap_or(defaults.osrm_url),
            nominatim_url: args.nominatim_url.unwrap_or(defaults.nominatim_url),
        };

        Ok(Self {
            request,
            location,
            favorite,
            details,
            json: args.json,
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
            endpoints,
        })
    }
}

fn fresh_query(mood: Option<String>, budget: Option<String>) -> Result<SearchQuery, CliError> {
    let mood = mood.ok_or(CliError::MissingArgument {
        field: ARG_MOOD,
        env: ENV_SEARCH_MOOD,
    })?;
    let budget = budget.ok_or(CliError::MissingArgument {
        field: ARG_BUDGET,
        env: ENV_SEARCH_BUDGET,
    })?;
    let mood: Mood = mood.parse()?;
    let budget: Budget = budget.parse()?;
    Ok(SearchQuery::new(mood, budget))
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_search_with(args, &HttpServiceFactory, &mut stdout)
}

pub(crate) fn run_search_with(
    args: SearchArgs,
    factory: &dyn ServiceFactory,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_search(&config, factory)?;
    write_search_report(writer, &report, config.json)
}

pub(crate) fn execute_search(
    config: &SearchConfig,
    factory: &dyn ServiceFactory,
) -> Result<SearchReport, CliError> {
    let mut session = open_session(&config.data_dir, Some(config.location))?;
    let places = factory.place_query(&config.endpoints)?;
    let mut tiers = factory.price_tiers();

    let (query, outcome) = match &config.request {
        SearchRequest::Fresh(query) => {
            let outcome = session.search(query.clone(), places.as_ref(), tiers.as_mut())?;
            (query.clone(), outcome)
        }
        SearchRequest::Replay(index) => {
            let query = session.history().get(*index).cloned().ok_or(
                CliError::PositionOutOfRange {
                    field: ARG_FROM_HISTORY,
                    position: index + 1,
                    available: session.history().len(),
                },
            )?;
            let outcome = session.replay_history(*index, places.as_ref(), tiers.as_mut())?;
            (query, outcome)
        }
    };

    let favorite = config
        .favorite
        .map(|index| save_favorite(&mut session, index))
        .transpose()?;
    let details = config
        .details
        .map(|index| describe(&mut session, index, &config.endpoints, factory))
        .transpose()?;

    Ok(SearchReport {
        query,
        places: match outcome {
            SearchOutcome::NoResults => Vec::new(),
            SearchOutcome::Ranked(places) => places,
        },
        favorite,
        details,
    })
}

fn result_at(
    session: &Session<FileKeyValueStore>,
    field: &'static str,
    index: usize,
) -> Result<RankedPlace, CliError> {
    let results = session.results();
    results
        .get(index)
        .cloned()
        .ok_or(CliError::PositionOutOfRange {
            field,
            position: index + 1,
            available: results.len(),
        })
}

fn save_favorite(
    session: &mut Session<FileKeyValueStore>,
    index: usize,
) -> Result<SavedFavorite, CliError> {
    let place = result_at(session, ARG_FAVORITE, index)?;
    let name = place.display_name().to_owned();
    let added = session.add_favorite(place)?;
    Ok(SavedFavorite { name, added })
}

fn describe(
    session: &mut Session<FileKeyValueStore>,
    index: usize,
    endpoints: &Endpoints,
    factory: &dyn ServiceFactory,
) -> Result<PlaceDetails, CliError> {
    let place = result_at(session, ARG_DETAILS, index)?;
    let routes = factory.routes(endpoints)?;
    let geocoder = factory.geocoder(endpoints)?;
    Ok(session.show_details(&place, routes.as_ref(), geocoder.as_ref())?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SearchConfig, CliError> {
    let merged = SearchArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SearchConfig::try_from(merged)
}
