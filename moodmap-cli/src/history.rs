//! History command implementation for the moodmap CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use moodmap_data::DEFAULT_DATA_DIR;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::render::{write_history, write_notice};
use crate::{ARG_CLEAR, ARG_DATA_DIR, ARG_JSON, ARG_REMOVE, CliError, open_session, zero_based};

/// CLI arguments for the `history` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "List the ten most recent searches, newest first. Run \
                 `moodmap search --from-history <position>` to repeat one.",
    about = "List or edit the search history"
)]
#[ortho_config(prefix = "MOODMAP")]
pub(crate) struct HistoryArgs {
    /// Remove the entry at this position (1 is newest).
    #[arg(long = ARG_REMOVE, value_name = "position", conflicts_with = ARG_CLEAR)]
    #[serde(default)]
    pub(crate) remove: Option<usize>,
    /// Remove every entry.
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

impl HistoryArgs {
    pub(crate) fn into_config(self) -> Result<HistoryConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        HistoryConfig::try_from(merged)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HistoryAction {
    List,
    /// Zero-based index of the entry to drop.
    Remove(usize),
    Clear,
}

/// Resolved `history` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HistoryConfig {
    pub(crate) action: HistoryAction,
    pub(crate) json: bool,
    pub(crate) data_dir: Utf8PathBuf,
}

impl TryFrom<HistoryArgs> for HistoryConfig {
    type Error = CliError;

    fn try_from(args: HistoryArgs) -> Result<Self, Self::Error> {
        let action = match (args.remove, args.clear) {
            (_, true) => HistoryAction::Clear,
            (Some(position), false) => HistoryAction::Remove(zero_based(ARG_REMOVE, position)?),
            (None, false) => HistoryAction::List,
        };
        Ok(Self {
            action,
            json: args.json,
            data_dir: args
                .data_dir
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATA_DIR)),
        })
    }
}

pub(crate) fn run_history(args: HistoryArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_history_with(args, &mut stdout)
}

pub(crate) fn run_history_with(args: HistoryArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut session = open_session(&config.data_dir, None)?;

    match config.action {
        HistoryAction::List => {}
        HistoryAction::Remove(index) => {
            let available = session.history().len();
            let removed = session
                .remove_history(index)?
                .ok_or(CliError::PositionOutOfRange {
                    field: ARG_REMOVE,
                    position: index + 1,
                    available,
                })?;
            write_notice(writer, &format!("Removed {removed}."), config.json)?;
        }
        HistoryAction::Clear => {
            session.clear_history()?;
            write_notice(writer, "Cleared history.", config.json)?;
        }
    }
    write_history(writer, session.history().entries(), config.json)
}
