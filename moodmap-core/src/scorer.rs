//! Heuristic scoring and synthetic place attributes.
//!
//! The score is a fixed linear heuristic over distance, rating and whether
//! the price tier suits the caller's [`Budget`]. Ratings and price tiers are
//! synthetic: ratings fall off with distance and tiers are drawn at random
//! on every search, so the same place can rank differently between runs.

use rand::Rng;

use crate::{Budget, PriceTier};

/// Score every place starts from.
pub const BASELINE_SCORE: f64 = 100.0;
/// Points lost per kilometre of distance.
pub const DISTANCE_PENALTY_PER_KM: f64 = 5.0;
/// Points gained per rating star.
pub const RATING_WEIGHT: f64 = 10.0;
/// Flat bonus when the price tier matches the budget.
pub const BUDGET_MATCH_BONUS: f64 = 20.0;
/// Lowest synthetic rating a place can receive.
pub const MIN_RATING: f64 = 3.0;
/// Synthetic rating of a place at zero distance.
pub const MAX_RATING: f64 = 5.0;

/// Compute the heuristic score for a place.
///
/// The result is not clamped and can be negative for distant places.
///
/// # Examples
/// ```
/// use moodmap_core::{Budget, PriceTier, score};
///
/// let matching = score(1.0, 4.5, PriceTier::TWO, Budget::Medium);
/// let other = score(1.0, 4.5, PriceTier::ONE, Budget::Medium);
/// assert_eq!(matching, 160.0);
/// assert_eq!(matching - other, 20.0);
/// ```
#[must_use]
pub fn score(distance_km: f64, rating: f64, tier: PriceTier, budget: Budget) -> f64 {
    let bonus = if budget.price_tier() == tier {
        BUDGET_MATCH_BONUS
    } else {
        0.0
    };
    BASELINE_SCORE - distance_km * DISTANCE_PENALTY_PER_KM + rating * RATING_WEIGHT + bonus
}

/// Synthetic rating for a place `distance_km` away.
///
/// Falls by half a star per kilometre from 5.0, floors at 3.0 and is
/// rounded to one decimal.
#[must_use]
pub fn synthetic_rating(distance_km: f64) -> f64 {
    let raw = (MAX_RATING - distance_km / 2.0).max(MIN_RATING);
    (raw * 10.0).round() / 10.0
}

/// Assign a desirability score to an annotated place.
///
/// Implementations must be deterministic in their inputs.
pub trait Scorer {
    /// Score a place with the given attributes for `budget`.
    fn score(&self, distance_km: f64, rating: f64, tier: PriceTier, budget: Budget) -> f64;
}

/// The fixed heuristic implemented by [`score`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicScorer;

impl Scorer for HeuristicScorer {
    fn score(&self, distance_km: f64, rating: f64, tier: PriceTier, budget: Budget) -> f64 {
        score(distance_km, rating, tier, budget)
    }
}

/// Supplies synthetic price tiers, one per ranked place.
pub trait PriceTierSource {
    /// Draw the tier for the next place.
    fn next_tier(&mut self) -> PriceTier;
}

/// Uniformly random tiers drawn from any [`Rng`].
///
/// # Examples
/// ```
/// use moodmap_core::{PriceTierSource, RandomPriceTiers};
///
/// let mut tiers = RandomPriceTiers::new(rand::thread_rng());
/// let tier = tiers.next_tier();
/// assert!((1..=3).contains(&tier.level()));
/// ```
#[derive(Debug, Clone)]
pub struct RandomPriceTiers<R> {
    rng: R,
}

impl<R: Rng> RandomPriceTiers<R> {
    /// Wrap a random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> PriceTierSource for RandomPriceTiers<R> {
    fn next_tier(&mut self) -> PriceTier {
        match self.rng.gen_range(1..=3_u8) {
            1 => PriceTier::ONE,
            2 => PriceTier::TWO,
            _ => PriceTier::THREE,
        }
    }
}

/// Always returns the same tier.
#[derive(Debug, Clone, Copy)]
pub struct FixedPriceTier(pub PriceTier);

impl PriceTierSource for FixedPriceTier {
    fn next_tier(&mut self) -> PriceTier {
        self.0
    }
}

/// Replays a sequence of tiers, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct CyclingPriceTiers {
    tiers: Vec<PriceTier>,
    next: usize,
}

impl CyclingPriceTiers {
    /// Cycle through `tiers`; an empty list behaves like tier 1.
    #[must_use]
    pub const fn new(tiers: Vec<PriceTier>) -> Self {
        Self { tiers, next: 0 }
    }
}

impl PriceTierSource for CyclingPriceTiers {
    fn next_tier(&mut self) -> PriceTier {
        let tier = self
            .tiers
            .get(self.next % self.tiers.len().max(1))
            .copied()
            .unwrap_or(PriceTier::ONE);
        self.next = self.next.wrapping_add(1);
        tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    fn tier(level: u8) -> PriceTier {
        PriceTier::new(level).expect("valid tier")
    }

    #[rstest]
    #[case(0.0, 5.0)]
    #[case(1.0, 4.5)]
    #[case(1.23, 4.4)]
    #[case(4.0, 3.0)]
    #[case(25.0, 3.0)]
    fn rating_falls_with_distance(#[case] distance_km: f64, #[case] expected: f64) {
        assert_eq!(synthetic_rating(distance_km), expected);
    }

    #[rstest]
    #[case(Budget::Low, 1)]
    #[case(Budget::Medium, 2)]
    #[case(Budget::High, 3)]
    fn matching_tier_earns_bonus(#[case] budget: Budget, #[case] level: u8) {
        let matching = score(2.0, 4.0, tier(level), budget);
        assert_eq!(matching, 100.0 - 10.0 + 40.0 + 20.0);
    }

    #[rstest]
    fn distant_places_can_score_negative() {
        assert!(score(100.0, 3.0, PriceTier::ONE, Budget::High) < 0.0);
    }

    #[rstest]
    fn random_tiers_cover_every_level() {
        let mut source = RandomPriceTiers::new(ChaCha8Rng::seed_from_u64(7));
        let mut seen = [false; 3];
        for _ in 0..200 {
            let level = source.next_tier().level();
            seen[usize::from(level) - 1] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[rstest]
    fn cycling_tiers_repeat() {
        let mut source = CyclingPriceTiers::new(vec![PriceTier::THREE, PriceTier::ONE]);
        let drawn: Vec<u8> = (0..5).map(|_| source.next_tier().level()).collect();
        assert_eq!(drawn, vec![3, 1, 3, 1, 3]);
    }

    #[rstest]
    fn empty_cycle_defaults_to_cheapest() {
        let mut source = CyclingPriceTiers::new(Vec::new());
        assert_eq!(source.next_tier(), PriceTier::ONE);
    }

    proptest! {
        #[test]
        fn budget_bonus_is_exactly_twenty(
            distance_km in 0.0f64..50.0,
            rating in 3.0f64..=5.0,
            budget_index in 0usize..3,
            offset in 1u8..3,
        ) {
            let budget = Budget::ALL[budget_index];
            let matching = budget.price_tier();
            let other = tier((matching.level() - 1 + offset) % 3 + 1);
            let with_bonus = score(distance_km, rating, matching, budget);
            let without = score(distance_km, rating, other, budget);
            prop_assert!((with_bonus - without - BUDGET_MATCH_BONUS).abs() < 1e-9);
        }

        #[test]
        fn rating_is_floored(distance_km in 4.0f64..10_000.0) {
            prop_assert_eq!(synthetic_rating(distance_km), MIN_RATING);
        }
    }
}
