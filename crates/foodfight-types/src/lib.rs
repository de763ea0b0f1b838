//! FoodFight Types - Canonical domain types for the meal battle platform
//!
//! This crate contains all foundational types for FoodFight with zero
//! dependencies on other foodfight crates. It defines:
//!
//! - Identity types (`MealId`)
//! - The `Meal` catalog record and its `Difficulty` tier
//! - Validated creation input (`NewMeal`)
//! - Battle bookkeeping (`BattleStats`) and derived leaderboard rows
//!   (`LeaderboardEntry`, `LeaderboardSort`)
//!
//! # Architectural Invariants
//!
//! 1. A `Meal` is only ever mutated by creation, soft-deletion, and the
//!    loser-retirement step of a battle
//! 2. `BattleStats` always satisfies `battles == wins + losses` - battles is
//!    derived, never stored
//! 3. Every input that crosses the service boundary is validated here before
//!    any other crate sees it

pub mod error;
pub mod meal;
pub mod stats;

pub use error::*;
pub use meal::*;
pub use stats::*;
