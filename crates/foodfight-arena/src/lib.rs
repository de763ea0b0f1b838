//! FoodFight Arena - Combatant staging and battle resolution
//!
//! This crate provides the in-memory battle engine: a capacity-2 arena where
//! meals are staged as combatants, and a probabilistic resolver that picks a
//! winner from their strength scores.
//!
//! # Features
//!
//! - **Staging**: At most two combatants, no duplicates, retired meals refused
//! - **Scoring**: Deterministic strength score from price and difficulty,
//!   tunable via [`ScorePolicy`]
//! - **Resolution**: Logistic score-delta to win-probability mapping with an
//!   injectable random source for reproducible outcomes
//! - **Winner retention**: The winner stays staged for the next challenger
//!
//! Persistence side effects (stat counters, loser retirement in the catalog)
//! are the caller's responsibility and belong outside the arena lock.
//!
//! # Example
//!
//! ```ignore
//! use foodfight_arena::{Arena, ScorePolicy};
//! use rand::SeedableRng;
//!
//! let mut arena = Arena::new(ScorePolicy::default());
//! arena.prepare(meal_a)?;
//! arena.prepare(meal_b)?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let outcome = arena.resolve(&mut rng)?;
//! println!("winner: {}", outcome.winner.name);
//! ```

pub mod score;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use foodfight_types::Meal;

pub use score::ScorePolicy;

/// Maximum number of staged combatants
pub const ARENA_CAPACITY: usize = 2;

/// Arena errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArenaError {
    /// Staging attempted while both slots are taken
    #[error("Combatant list is full, cannot add more combatants")]
    ArenaFull,

    /// The meal is already staged
    #[error("Meal '{0}' is already prepped as a combatant")]
    DuplicateCombatant(String),

    /// The meal was retired before staging
    #[error("Meal '{0}' has been deleted")]
    MealNotFound(String),

    /// Battle requested with fewer than two staged combatants
    #[error("Two combatants must be prepped for a battle ({staged} staged)")]
    InsufficientCombatants { staged: usize },
}

/// Result type for arena operations
pub type ArenaResult<T> = Result<T, ArenaError>;

/// A meal staged for battle, with its strength score cached at staging time
///
/// Meal attributes other than the deleted flag never change, so the staged
/// score is identical to the battle-time score.
#[derive(Debug, Clone, Serialize)]
pub struct Combatant {
    #[serde(flatten)]
    pub meal: Meal,
    pub battle_score: f64,
}

/// Outcome of one resolved battle
///
/// `win_probability` is the probability that was assigned to the
/// first-staged combatant, regardless of who won the draw.
#[derive(Debug, Clone, Serialize)]
pub struct BattleOutcome {
    pub winner: Meal,
    pub loser: Meal,
    pub winner_score: f64,
    pub loser_score: f64,
    pub win_probability: f64,
}

/// The combatant arena
///
/// Holds zero, one, or two staged combatants in staging order. The service
/// owns exactly one instance behind a mutex; all methods are synchronous so
/// the lock is never held across I/O.
#[derive(Debug)]
pub struct Arena {
    combatants: Vec<Combatant>,
    policy: ScorePolicy,
}

impl Arena {
    /// Create an empty arena with the given scoring policy
    pub fn new(policy: ScorePolicy) -> Self {
        Self {
            combatants: Vec::with_capacity(ARENA_CAPACITY),
            policy,
        }
    }

    /// The scoring policy in effect
    pub fn policy(&self) -> &ScorePolicy {
        &self.policy
    }

    /// Stage a meal as a combatant
    ///
    /// The caller resolves the meal through the catalog first; this re-checks
    /// the retired flag, capacity, and id uniqueness, then caches the score.
    pub fn prepare(&mut self, meal: Meal) -> ArenaResult<()> {
        if meal.deleted {
            return Err(ArenaError::MealNotFound(meal.name));
        }
        if self.combatants.len() >= ARENA_CAPACITY {
            return Err(ArenaError::ArenaFull);
        }
        if self.combatants.iter().any(|c| c.meal.id == meal.id) {
            return Err(ArenaError::DuplicateCombatant(meal.name));
        }

        let battle_score = self.policy.score(&meal);
        info!(meal = %meal.name, score = battle_score, "combatant prepped");
        self.combatants.push(Combatant { meal, battle_score });
        Ok(())
    }

    /// Staged combatants in staging order
    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    /// Number of staged combatants
    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    /// Whether the arena is empty
    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    /// Remove all staged combatants; idempotent
    pub fn clear(&mut self) {
        self.combatants.clear();
    }

    /// Resolve a battle between the two staged combatants
    ///
    /// Draws a uniform value in [0, 1) from `rng`; the first-staged combatant
    /// wins when the draw falls below its logistic win probability. The loser
    /// is removed and the winner stays as the sole member. Failure leaves the
    /// arena untouched.
    pub fn resolve<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ArenaResult<BattleOutcome> {
        if self.combatants.len() < ARENA_CAPACITY {
            return Err(ArenaError::InsufficientCombatants {
                staged: self.combatants.len(),
            });
        }

        let score_a = self.combatants[0].battle_score;
        let score_b = self.combatants[1].battle_score;
        let win_probability = self.policy.win_probability(score_a - score_b);

        let roll: f64 = rng.gen();
        let first_wins = roll < win_probability;
        let loser_index = if first_wins { 1 } else { 0 };

        let loser = self.combatants.remove(loser_index);
        let winner = &self.combatants[0];

        info!(
            winner = %winner.meal.name,
            loser = %loser.meal.name,
            probability = win_probability,
            roll,
            "battle resolved"
        );

        Ok(BattleOutcome {
            winner: winner.meal.clone(),
            winner_score: winner.battle_score,
            loser_score: loser.battle_score,
            loser: loser.meal,
            win_probability,
        })
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new(ScorePolicy::default())
    }
}
