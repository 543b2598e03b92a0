//! Annotate, score and order raw search results.

use log::debug;

use crate::{
    Budget, Coordinate, HeuristicScorer, PriceTierSource, RankedPlace, RawPlace, Scorer,
    synthetic_rating,
};

/// Number of places a search returns at most.
pub const MAX_RESULTS: usize = 6;

/// Result of a search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The service found nothing. Not an error.
    NoResults,
    /// Ranked places, best first.
    Ranked(Vec<RankedPlace>),
}

impl SearchOutcome {
    /// Ranked places; empty for [`SearchOutcome::NoResults`].
    #[must_use]
    pub fn places(&self) -> &[RankedPlace] {
        match self {
            Self::NoResults => &[],
            Self::Ranked(places) => places,
        }
    }

    /// Whether the search found nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoResults)
    }
}

/// Orders raw places by heuristic score.
///
/// # Examples
/// ```
/// use moodmap_core::{Budget, Coordinate, FixedPriceTier, PriceTier, Ranker, RawPlace};
///
/// let origin = Coordinate::new(0.0, 0.0)?;
/// let places = vec![
///     RawPlace::with_empty_tags(1, Coordinate::new(0.02, 0.0)?),
///     RawPlace::with_empty_tags(2, Coordinate::new(0.001, 0.0)?),
/// ];
/// let outcome = Ranker::new().rank(origin, Budget::Low, places, &mut FixedPriceTier(PriceTier::ONE));
/// assert_eq!(outcome.places()[0].place.id, 2);
/// # Ok::<(), moodmap_core::CoordinateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Ranker<S = HeuristicScorer> {
    scorer: S,
    limit: usize,
}

impl Ranker {
    /// A ranker using [`HeuristicScorer`] and [`MAX_RESULTS`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_scorer(HeuristicScorer)
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scorer> Ranker<S> {
    /// A ranker using a custom scorer.
    pub const fn with_scorer(scorer: S) -> Self {
        Self {
            scorer,
            limit: MAX_RESULTS,
        }
    }

    /// Override how many places are kept.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Annotate every place relative to `origin`, sort best first and keep
    /// the top results.
    ///
    /// Ties keep the order the service returned them in. One price tier is
    /// drawn from `tiers` per place, in service order.
    pub fn rank(
        &self,
        origin: Coordinate,
        budget: Budget,
        places: Vec<RawPlace>,
        tiers: &mut dyn PriceTierSource,
    ) -> SearchOutcome {
        if places.is_empty() {
            return SearchOutcome::NoResults;
        }
        let found = places.len();

        let mut ranked: Vec<RankedPlace> = places
            .into_iter()
            .map(|place| self.annotate(origin, budget, place, tiers))
            .collect();

        // `sort_by` is stable, so equal scores keep service order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.truncate(self.limit);

        debug!("ranked {found} places, kept {}", ranked.len());
        SearchOutcome::Ranked(ranked)
    }

    fn annotate(
        &self,
        origin: Coordinate,
        budget: Budget,
        place: RawPlace,
        tiers: &mut dyn PriceTierSource,
    ) -> RankedPlace {
        let distance_km = origin.distance_km_to(place.location);
        let rating = synthetic_rating(distance_km);
        let price_tier = tiers.next_tier();
        let score = self.scorer.score(distance_km, rating, price_tier, budget);
        RankedPlace {
            place,
            distance_km,
            rating,
            price_tier,
            approx_cost_range: price_tier.cost_range().to_owned(),
            score,
        }
    }
}
