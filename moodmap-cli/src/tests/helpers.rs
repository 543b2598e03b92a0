//! Test helpers: stub services, throwaway data directories and a command
//! dispatcher that captures stdout.

use super::*;
use crate::favorites::run_favorites_with;
use crate::history::run_history_with;
use crate::search::run_search_with;
use crate::services::{Endpoints, ServiceFactory};
use camino::Utf8PathBuf;
use moodmap_core::test_support::{StubGeocoder, StubPlaceQueryService, StubRouteService};
use moodmap_core::{
    FixedPriceTier, PlaceQueryService, PriceTier, PriceTierSource, RawPlace, ReverseGeocoder,
    RouteService, Tags,
};
use tempfile::TempDir;

pub(super) const LAT: &str = "12.9716";
pub(super) const LON: &str = "77.5946";

/// `count` named places spreading north-east from ([`LAT`], [`LON`]).
pub(super) fn cafes(count: u32) -> Vec<RawPlace> {
    (0..count)
        .map(|i| {
            let step = f64::from(i) * 0.003;
            let location =
                Coordinate::new(12.9716 + step, 77.5946 + step).expect("valid coordinate");
            let tags = Tags::from([("name".to_owned(), format!("Cafe {i}"))]);
            RawPlace::new(u64::from(i), location, tags)
        })
        .collect()
}

/// Serves canned places, straight-line routes and a fixed address, and
/// assigns every place tier 2.
#[derive(Debug, Default)]
pub(super) struct StubServiceFactory {
    pub(super) places: Vec<RawPlace>,
    pub(super) address: Option<String>,
}

impl ServiceFactory for StubServiceFactory {
    fn place_query(&self, _endpoints: &Endpoints) -> Result<Box<dyn PlaceQueryService>, CliError> {
        Ok(Box::new(StubPlaceQueryService::new(self.places.clone())))
    }

    fn routes(&self, _endpoints: &Endpoints) -> Result<Box<dyn RouteService>, CliError> {
        Ok(Box::new(StubRouteService::straight_line()))
    }

    fn geocoder(&self, _endpoints: &Endpoints) -> Result<Box<dyn ReverseGeocoder>, CliError> {
        Ok(Box::new(StubGeocoder(Ok(self.address.clone()))))
    }

    fn price_tiers(&self) -> Box<dyn PriceTierSource> {
        Box::new(FixedPriceTier(PriceTier::TWO))
    }
}

/// A temporary directory standing in for `.moodmap`.
#[derive(Debug)]
pub(super) struct DataDir {
    _tmp: TempDir,
    path: Utf8PathBuf,
}

impl DataDir {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let path = Utf8PathBuf::from_path_buf(tmp.path().join("data")).expect("utf-8 path");
        Self { _tmp: tmp, path }
    }

    pub(super) fn path(&self) -> &Utf8PathBuf {
        &self.path
    }

    /// argv for `command` against this directory, followed by `extra`.
    pub(super) fn argv(&self, command: &str, extra: &[&str]) -> Vec<String> {
        let mut argv = vec![
            "moodmap".to_owned(),
            command.to_owned(),
            format!("--{ARG_DATA_DIR}"),
            self.path.as_str().to_owned(),
        ];
        argv.extend(extra.iter().map(|arg| (*arg).to_owned()));
        argv
    }

    /// argv for a search in central Bengaluru.
    pub(super) fn search_argv(&self, extra: &[&str]) -> Vec<String> {
        let mut args = vec!["--lat", LAT, "--lon", LON];
        args.extend_from_slice(extra);
        self.argv("search", &args)
    }
}

/// Parse `argv` and run the command, returning its result and stdout.
pub(super) fn run_cli(
    argv: Vec<String>,
    factory: &dyn ServiceFactory,
) -> (Result<(), CliError>, String) {
    let mut stdout = Vec::new();
    let result = Cli::try_parse_from(argv)
        .map_err(CliError::from)
        .and_then(|cli| match cli.command {
            Command::Search(args) => run_search_with(args, factory, &mut stdout),
            Command::Favorites(args) => run_favorites_with(args, &mut stdout),
            Command::History(args) => run_history_with(args, &mut stdout),
        });
    let stdout = String::from_utf8(stdout).expect("stdout utf-8");
    (result, stdout)
}
