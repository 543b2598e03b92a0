//! Forward-only screen flow.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three top-level views, in the order the user passes through them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Landing view.
    #[default]
    Intro,
    /// Sign-in view. No credentials are checked.
    Login,
    /// Search, results, favourites and history.
    App,
}

/// Raised when a transition would go backwards or skip a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move from the {from} screen to the {to} screen")]
pub struct ScreenError {
    /// Current screen.
    pub from: Screen,
    /// Requested screen.
    pub to: Screen,
}

impl Screen {
    /// The screen after this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Intro => Some(Self::Login),
            Self::Login => Some(Self::App),
            Self::App => None,
        }
    }

    /// Move to `to`, which must be the immediate successor.
    ///
    /// # Errors
    /// Returns [`ScreenError`] for any other transition.
    pub fn advance_to(self, to: Self) -> Result<Self, ScreenError> {
        if self.next() == Some(to) {
            Ok(to)
        } else {
            Err(ScreenError { from: self, to })
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Intro => "intro",
            Self::Login => "login",
            Self::App => "app",
        })
    }
}
