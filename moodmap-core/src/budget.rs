//! Budget preferences and synthetic price tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A three-level spending preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    /// Prefers tier 1 places.
    Low,
    /// Prefers tier 2 places.
    Medium,
    /// Prefers tier 3 places.
    High,
}

impl Budget {
    /// Every budget, cheapest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// The price tier this budget rewards.
    #[must_use]
    pub const fn price_tier(self) -> PriceTier {
        match self {
            Self::Low => PriceTier::ONE,
            Self::Medium => PriceTier::TWO,
            Self::High => PriceTier::THREE,
        }
    }

    /// Lowercase name used in storage and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown budget name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown budget {0:?}; expected one of low, medium, high")]
pub struct ParseBudgetError(pub String);

impl FromStr for Budget {
    type Err = ParseBudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|budget| budget.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBudgetError(s.to_owned()))
    }
}

/// Synthetic price tier in `1..=3`.
///
/// Tiers are not derived from any real pricing signal; see
/// [`PriceTierSource`](crate::PriceTierSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PriceTier(u8);

/// Error returned for tiers outside `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("price tier {0} is outside 1..=3")]
pub struct PriceTierError(pub u8);

impl PriceTier {
    /// Cheapest tier.
    pub const ONE: Self = Self(1);
    /// Middle tier.
    pub const TWO: Self = Self(2);
    /// Most expensive tier.
    pub const THREE: Self = Self(3);

    /// Validate and construct a tier.
    ///
    /// # Errors
    /// Returns [`PriceTierError`] when `level` is not 1, 2 or 3.
    pub const fn new(level: u8) -> Result<Self, PriceTierError> {
        match level {
            1..=3 => Ok(Self(level)),
            other => Err(PriceTierError(other)),
        }
    }

    /// Numeric level.
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Approximate spend per visit for this tier.
    #[must_use]
    pub const fn cost_range(self) -> &'static str {
        match self.0 {
            1 => "₹200–₹500",
            2 => "₹500–₹1500",
            _ => "₹1500–₹4000",
        }
    }
}

impl TryFrom<u8> for PriceTier {
    type Error = PriceTierError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PriceTier> for u8 {
    fn from(value: PriceTier) -> Self {
        value.0
    }
}
