//! Construction of the external services a search talks to.

use moodmap_core::{
    PlaceQueryService, PriceTierSource, RandomPriceTiers, ReverseGeocoder, RouteService,
};
use moodmap_data::{
    DEFAULT_NOMINATIM_URL, DEFAULT_OSRM_URL, DEFAULT_OVERPASS_URL, HttpServiceConfig,
    NominatimReverseGeocoder, OsrmRouteService, OverpassPlaceQueryService,
};

use crate::CliError;

/// Base URLs of the three HTTP services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoints {
    pub(crate) overpass_url: String,
    pub(crate) osrm_url: String,
    pub(crate) nominatim_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            overpass_url: DEFAULT_OVERPASS_URL.to_owned(),
            osrm_url: DEFAULT_OSRM_URL.to_owned(),
            nominatim_url: DEFAULT_NOMINATIM_URL.to_owned(),
        }
    }
}

/// Builds service instances for the current invocation.
///
/// Services are built lazily: a plain search never constructs the routing
/// or geocoding clients.
pub(crate) trait ServiceFactory {
    fn place_query(&self, endpoints: &Endpoints) -> Result<Box<dyn PlaceQueryService>, CliError>;
    fn routes(&self, endpoints: &Endpoints) -> Result<Box<dyn RouteService>, CliError>;
    fn geocoder(&self, endpoints: &Endpoints) -> Result<Box<dyn ReverseGeocoder>, CliError>;
    fn price_tiers(&self) -> Box<dyn PriceTierSource>;
}

pub(crate) struct HttpServiceFactory;

impl ServiceFactory for HttpServiceFactory {
    fn place_query(&self, endpoints: &Endpoints) -> Result<Box<dyn PlaceQueryService>, CliError> {
        let config = HttpServiceConfig::new(endpoints.overpass_url.clone());
        let service = OverpassPlaceQueryService::with_config(config).map_err(|source| {
            CliError::BuildService {
                service: "Overpass",
                base_url: endpoints.overpass_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(service))
    }

    fn routes(&self, endpoints: &Endpoints) -> Result<Box<dyn RouteService>, CliError> {
        let config = HttpServiceConfig::new(endpoints.osrm_url.clone());
        let service = OsrmRouteService::with_config(config).map_err(|source| {
            CliError::BuildService {
                service: "OSRM",
                base_url: endpoints.osrm_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(service))
    }

    fn geocoder(&self, endpoints: &Endpoints) -> Result<Box<dyn ReverseGeocoder>, CliError> {
        let config = HttpServiceConfig::new(endpoints.nominatim_url.clone());
        let service = NominatimReverseGeocoder::with_config(config).map_err(|source| {
            CliError::BuildService {
                service: "Nominatim",
                base_url: endpoints.nominatim_url.clone(),
                source,
            }
        })?;
        Ok(Box::new(service))
    }

    fn price_tiers(&self) -> Box<dyn PriceTierSource> {
        Box::new(RandomPriceTiers::new(rand::thread_rng()))
    }
}
