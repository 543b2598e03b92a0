//! Favourites command implementation for the moodmap CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use moodmap_data::DEFAULT_DATA_DIR;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::render::{write_favorites, write_notice};
use crate::{ARG_CLEAR, ARG_DATA_DIR, ARG_JSON, ARG_REMOVE, CliError, open_session};

/// CLI arguments for the `favorites` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List saved favourites. Favourites are identified by \
                 latitude, so --remove takes the latitude printed next to \
                 the place.",
    about = "List or edit saved favourites"
)]
#[ortho_config(prefix = "MOODMAP")]
pub(crate) struct FavoritesArgs {
    /// Remove the favourite at this latitude.
    #[arg(
        long = ARG_REMOVE,
        value_name = "latitude",
        allow_negative_numbers = true,
        conflicts_with = ARG_CLEAR
    )]
    #[serde(default)]
    pub(crate) remove: Option<f64>,
    /// Remove every favourite.
    #[arg(long = ARG_CLEAR)]
    #[serde(default)]
    pub(crate) clear: bool,
    /// Print JSON instead of text.
    #[arg(long = ARG_JSON)]
    #[serde(default)]
    pub(crate) json: bool,
    /// Directory holding favourites and history.
    #[arg(long = ARG_DATA_DIR, value_name = "dir")]
    #[serde(default)]
    pub(crate) data_dir: Option<Utf8PathBuf>,
}

impl FavoritesArgs {
    pub(crate) fn into_config(self) -> Result<FavoritesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(FavoritesConfig::from(merged))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum FavoritesAction {
    List,
    Remove(f64),
    Clear,
}

/// Resolved `favorites` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FavoritesConfig {
    pub(crate) action: FavoritesAction,
    pub(crate) json: bool,
    pub(crate) data_dir: Utf8PathBuf,
}

impl From<FavoritesArgs> for FavoritesConfig {
    fn from(args: FavoritesArgs) -> Self {
        let action = match (args.remove, args.clear) {
            (_, true) => FavoritesAction::Clear,
            (Some(latitude), false) => FavoritesAction::Remove(latitude),
            (None, false) => FavoritesAction::List,
        };
        Self {
            action,
            json: args.json,
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
        }
    }
}

pub(crate) fn run_favorites(args: FavoritesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_favorites_with(args, &mut stdout)
}

pub(crate) fn run_favorites_with(
    args: FavoritesArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut session = open_session(&config.data_dir, None)?;

    match config.action {
        FavoritesAction::List => {}
        FavoritesAction::Remove(latitude) => {
            let notice = if session.remove_favorite(latitude)? {
                format!("Removed the favourite at latitude {latitude}.")
            } else {
                format!("No favourite at latitude {latitude}.")
            };
            write_notice(writer, &notice, config.json)?;
        }
        FavoritesAction::Clear => {
            session.clear_favorites()?;
            write_notice(writer, "Cleared favourites.", config.json)?;
        }
    }
    write_favorites(writer, session.favorites().places(), config.json)
}
