//! Error types emitted by the moodmap CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use moodmap_core::{CoordinateError, MoodError, ParseBudgetError, SessionError};
use moodmap_data::ServiceBuildError;
use thiserror::Error;

/// Errors emitted by the moodmap CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// The mood keyword cannot be used as an amenity value.
    #[error("invalid --mood: {0}")]
    InvalidMood(#[from] MoodError),
    /// The budget is not one of `low`, `medium` or `high`.
    #[error("invalid --budget: {0}")]
    InvalidBudget(#[from] ParseBudgetError),
    /// The latitude/longitude pair is out of range.
    #[error("invalid location: {0}")]
    InvalidLocation(#[from] CoordinateError),
    /// A 1-based position option was given as zero.
    #[error("--{field} counts from 1")]
    ZeroPosition { field: &'static str },
    /// A position option points past the end of a listing.
    #[error("--{field} {position} is out of range ({available} available)")]
    PositionOutOfRange {
        field: &'static str,
        position: usize,
        available: usize,
    },
    /// Building an HTTP service adapter failed.
    #[error("failed to build {service} client for {base_url}: {source}")]
    BuildService {
        service: &'static str,
        base_url: String,
        #[source]
        source: ServiceBuildError,
    },
    /// The session rejected an operation or a service call failed.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
