//! Shared test harness modules for the moodmap CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod collection_steps;
mod helpers;
