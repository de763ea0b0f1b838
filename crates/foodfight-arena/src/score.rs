//! Battle score and win probability policy
//!
//! The exact constants here are tuning, not contract: any deterministic
//! mapping where a higher price raises the score, a harder tier lowers it,
//! and the probability curve is symmetric and strictly increasing in the
//! score delta is a conforming policy.

use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use foodfight_types::{Difficulty, Meal};

/// Tunable scoring and probability constants
///
/// `score = price * price_weight - handicap(difficulty)`, with the handicap
/// growing with the tier. The score delta maps through a logistic curve
/// `1 / (1 + exp(-delta / steepness))` into a win probability for the
/// first-staged combatant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorePolicy {
    /// Multiplier applied to the meal price
    pub price_weight: f64,
    /// Handicap subtracted for LOW difficulty
    pub low_handicap: f64,
    /// Handicap subtracted for MED difficulty
    pub med_handicap: f64,
    /// Handicap subtracted for HIGH difficulty
    pub high_handicap: f64,
    /// Logistic scale; larger values flatten the probability curve
    pub steepness: f64,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            price_weight: 10.0,
            low_handicap: 1.0,
            med_handicap: 3.0,
            high_handicap: 6.0,
            steepness: 25.0,
        }
    }
}

impl ScorePolicy {
    /// Handicap for a difficulty tier; harder tiers carry the larger handicap
    pub fn handicap(&self, difficulty: Difficulty) -> f64 {
        match difficulty {
            Difficulty::Low => self.low_handicap,
            Difficulty::Med => self.med_handicap,
            Difficulty::High => self.high_handicap,
        }
    }

    /// Strength score for a meal
    ///
    /// Monotonically increasing in price, decreasing in difficulty.
    pub fn score(&self, meal: &Meal) -> f64 {
        let price = meal.price.to_f64().unwrap_or(0.0);
        price * self.price_weight - self.handicap(meal.difficulty)
    }

    /// Win probability for the side whose score leads by `delta`
    ///
    /// Logistic in the delta: `p(0) == 0.5`, strictly increasing, and inside
    /// the open interval (0, 1) for any finite delta.
    pub fn win_probability(&self, delta: f64) -> f64 {
        1.0 / (1.0 + (-delta / self.steepness).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use foodfight_types::MealId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn meal(price: Decimal, difficulty: Difficulty) -> Meal {
        Meal {
            id: MealId(1),
            name: "Test Meal".to_string(),
            cuisine: "Test".to_string(),
            price,
            difficulty,
            deleted: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_score_increases_with_price() {
        let policy = ScorePolicy::default();
        let cheap = policy.score(&meal(dec!(5.00), Difficulty::Med));
        let pricey = policy.score(&meal(dec!(25.00), Difficulty::Med));
        assert!(pricey > cheap);
    }

    #[test]
    fn test_harder_tier_lowers_score() {
        let policy = ScorePolicy::default();
        let low = policy.score(&meal(dec!(12.00), Difficulty::Low));
        let med = policy.score(&meal(dec!(12.00), Difficulty::Med));
        let high = policy.score(&meal(dec!(12.00), Difficulty::High));
        assert!(low > med);
        assert!(med > high);
    }

    #[test]
    fn test_probability_symmetric_at_zero() {
        let policy = ScorePolicy::default();
        assert_eq!(policy.win_probability(0.0), 0.5);
    }

    #[test]
    fn test_probability_strictly_increasing() {
        let policy = ScorePolicy::default();
        let deltas = [-100.0, -10.0, -1.0, 0.0, 1.0, 10.0, 100.0];
        for pair in deltas.windows(2) {
            assert!(policy.win_probability(pair[0]) < policy.win_probability(pair[1]));
        }
    }

    #[test]
    fn test_probability_bounded_away_from_extremes() {
        let policy = ScorePolicy::default();
        let p_lo = policy.win_probability(-1e4);
        let p_hi = policy.win_probability(1e4);
        assert!(p_lo > 0.0);
        assert!(p_hi < 1.0);
    }

    #[test]
    fn test_mirror_probabilities_sum_to_one() {
        let policy = ScorePolicy::default();
        for delta in [0.5, 7.0, 42.0] {
            let sum = policy.win_probability(delta) + policy.win_probability(-delta);
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_higher_score_wins_more_than_half() {
        let policy = ScorePolicy::default();
        let a = policy.score(&meal(dec!(19.99), Difficulty::Low));
        let b = policy.score(&meal(dec!(9.99), Difficulty::High));
        assert!(a > b);
        assert!(policy.win_probability(a - b) > 0.5);
    }
}
