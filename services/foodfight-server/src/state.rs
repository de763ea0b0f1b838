//! Application state shared across handlers
//!
//! One arena and one battle RNG per running service, each behind its own
//! mutex. Locks are only ever taken around synchronous arena work; handlers
//! do catalog reads before locking and persistence writes after unlocking.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;

use foodfight_arena::{Arena, ScorePolicy};
use foodfight_db::Database;

/// Shared application state
pub struct AppState {
    /// Database handle
    pub db: Database,
    /// The single combatant arena
    pub arena: Mutex<Arena>,
    /// Battle outcome RNG; seedable for reproducible runs
    pub rng: Mutex<StdRng>,
    /// Whether retired meals stay visible on the leaderboard
    pub include_retired: bool,
}

impl AppState {
    /// Create application state
    ///
    /// Passing a seed makes every battle outcome reproducible; without one
    /// the RNG is seeded from OS entropy.
    pub fn new(
        db: Database,
        policy: ScorePolicy,
        seed: Option<u64>,
        include_retired: bool,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            db,
            arena: Mutex::new(Arena::new(policy)),
            rng: Mutex::new(rng),
            include_retired,
        }
    }
}
