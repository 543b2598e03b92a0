//! Text and JSON output for the CLI commands.

use std::io::{self, Write};

use moodmap_core::{PlaceDetails, RankedPlace, SearchQuery};
use serde::Serialize;

use crate::CliError;

/// Outcome of a `search` invocation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SearchReport {
    pub(crate) query: SearchQuery,
    pub(crate) places: Vec<RankedPlace>,
    pub(crate) favorite: Option<SavedFavorite>,
    pub(crate) details: Option<PlaceDetails>,
}

/// A result the user asked to save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SavedFavorite {
    pub(crate) name: String,
    /// False when a favourite at the same latitude already existed.
    pub(crate) added: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchView<'a> {
    query: &'a SearchQuery,
    places: &'a [RankedPlace],
    #[serde(skip_serializing_if = "Option::is_none")]
    favorite: Option<&'a SavedFavorite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<DetailsView<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DetailsView<'a> {
    name: &'a str,
    distance_km: f64,
    rating: f64,
    approx_cost_range: &'a str,
    score: f64,
    address: &'a str,
    route: RouteView,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteView {
    distance_m: f64,
    duration_secs: f64,
    /// `[longitude, latitude]` pairs, as GeoJSON orders them.
    coordinates: Vec<[f64; 2]>,
}

impl<'a> From<&'a PlaceDetails> for DetailsView<'a> {
    fn from(details: &'a PlaceDetails) -> Self {
        Self {
            name: &details.name,
            distance_km: details.distance_km,
            rating: details.rating,
            approx_cost_range: &details.approx_cost_range,
            score: details.score,
            address: &details.address,
            route: RouteView {
                distance_m: details.route.distance_m,
                duration_secs: details.route.duration.as_secs_f64(),
                coordinates: details
                    .route
                    .geometry
                    .coords()
                    .map(|coord| [coord.x, coord.y])
                    .collect(),
            },
        }
    }
}

pub(crate) fn write_search_report(
    writer: &mut dyn Write,
    report: &SearchReport,
    json: bool,
) -> Result<(), CliError> {
    if json {
        return write_json(
            writer,
            &SearchView {
                query: &report.query,
                places: &report.places,
                favorite: report.favorite.as_ref(),
                details: report.details.as_ref().map(DetailsView::from),
            },
        );
    }
    search_text(writer, report).map_err(CliError::WriteOutput)
}

pub(crate) fn write_favorites(
    writer: &mut dyn Write,
    places: &[RankedPlace],
    json: bool,
) -> Result<(), CliError> {
    if json {
        return write_json(writer, &places);
    }
    favorites_text(writer, places).map_err(CliError::WriteOutput)
}

pub(crate) fn write_history(
    writer: &mut dyn Write,
    entries: &[SearchQuery],
    json: bool,
) -> Result<(), CliError> {
    if json {
        return write_json(writer, &entries);
    }
    history_text(writer, entries).map_err(CliError::WriteOutput)
}

/// Write a one-line status message; suppressed in JSON mode.
pub(crate) fn write_notice(
    writer: &mut dyn Write,
    notice: &str,
    json: bool,
) -> Result<(), CliError> {
    if json {
        return Ok(());
    }
    writeln!(writer, "{notice}").map_err(CliError::WriteOutput)
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn search_text(writer: &mut dyn Write, report: &SearchReport) -> io::Result<()> {
    writeln!(writer, "{}", report.query)?;
    if report.places.is_empty() {
        writeln!(writer, "No places found.")?;
    }
    for (position, place) in report.places.iter().enumerate() {
        writeln!(writer, "{}. {}", position + 1, place.display_name())?;
        writeln!(
            writer,
            "   {:.2} km | rating {:.1} | {} | score {:.0}",
            place.distance_km, place.rating, place.approx_cost_range, place.score
        )?;
    }
    if let Some(favorite) = &report.favorite {
        if favorite.added {
            writeln!(writer, "Saved {} to favourites.", favorite.name)?;
        } else {
            writeln!(writer, "{} is already a favourite.", favorite.name)?;
        }
    }
    if let Some(details) = &report.details {
        details_text(writer, details)?;
    }
    Ok(())
}

fn details_text(writer: &mut dyn Write, details: &PlaceDetails) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(writer, "{}", details.name)?;
    writeln!(writer, "  Distance: {:.2} km", details.distance_km)?;
    writeln!(writer, "  Rating: {:.1}", details.rating)?;
    writeln!(writer, "  Approx spend: {}", details.approx_cost_range)?;
    writeln!(writer, "  Score: {:.0}", details.score)?;
    writeln!(writer, "  Address: {}", details.address)?;
    writeln!(
        writer,
        "  Route: {:.2} km by car, about {} min",
        details.route.distance_m / 1000.0,
        details.route.duration.as_secs().div_ceil(60)
    )
}

fn favorites_text(writer: &mut dyn Write, places: &[RankedPlace]) -> io::Result<()> {
    if places.is_empty() {
        return writeln!(writer, "No favourites saved.");
    }
    for place in places {
        writeln!(
            writer,
            "{} (lat {}, lon {})",
            place.display_name(),
            place.location().latitude(),
            place.location().longitude()
        )?;
    }
    Ok(())
}

fn history_text(writer: &mut dyn Write, entries: &[SearchQuery]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(writer, "No searches yet.");
    }
    for (position, entry) in entries.iter().enumerate() {
        writeln!(writer, "{}. {entry}", position + 1)?;
    }
    Ok(())
}
