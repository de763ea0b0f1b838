//! Battle bookkeeping and leaderboard types
//!
//! `BattleStats` rows are created lazily on a meal's first battle and are
//! never deleted, even after the meal itself is retired or the catalog is
//! wiped. `battles` is always derived from wins + losses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::meal::Meal;

/// Cumulative win/loss counters for one meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleStats {
    pub wins: u32,
    pub losses: u32,
}

impl BattleStats {
    /// Zeroed counters for a meal that has never fought
    pub fn zero() -> Self {
        Self::default()
    }

    /// Total battles fought
    pub fn battles(&self) -> u32 {
        self.wins + self.losses
    }

    /// Wins divided by battles; 0.0 for a meal that has never fought
    pub fn win_ratio(&self) -> f64 {
        if self.battles() == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.battles())
        }
    }

    /// Apply one battle result
    pub fn record(&mut self, won: bool) {
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
    }
}

/// One row of the leaderboard, derived from a meal and its stats
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(flatten)]
    pub meal: Meal,
    pub wins: u32,
    pub losses: u32,
    pub battles: u32,
    pub win_ratio: f64,
}

impl LeaderboardEntry {
    pub fn new(meal: Meal, stats: BattleStats) -> Self {
        Self {
            meal,
            wins: stats.wins,
            losses: stats.losses,
            battles: stats.battles(),
            win_ratio: stats.win_ratio(),
        }
    }
}

/// Leaderboard ordering key
///
/// `WinRatio` is the default full ordering (ratio, then battles, then name);
/// `Wins` ranks by raw win count with the same tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardSort {
    WinRatio,
    Wins,
}

impl Default for LeaderboardSort {
    fn default() -> Self {
        Self::WinRatio
    }
}

impl LeaderboardSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaderboardSort::WinRatio => "win_ratio",
            LeaderboardSort::Wins => "wins",
        }
    }
}

impl fmt::Display for LeaderboardSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaderboardSort {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win_ratio" => Ok(LeaderboardSort::WinRatio),
            "wins" => Ok(LeaderboardSort::Wins),
            other => Err(ValidationError::UnknownSort(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_stats() {
        let stats = BattleStats::zero();
        assert_eq!(stats.battles(), 0);
        assert_eq!(stats.win_ratio(), 0.0);
    }

    #[test]
    fn test_battles_is_wins_plus_losses() {
        let mut stats = BattleStats::zero();
        stats.record(true);
        stats.record(true);
        stats.record(false);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.losses, 1);
        assert_eq!(stats.battles(), 3);
    }

    #[test]
    fn test_win_ratio() {
        let stats = BattleStats { wins: 3, losses: 1 };
        assert_eq!(stats.win_ratio(), 0.75);
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!(
            LeaderboardSort::from_str("win_ratio").unwrap(),
            LeaderboardSort::WinRatio
        );
        assert_eq!(LeaderboardSort::from_str("wins").unwrap(), LeaderboardSort::Wins);
        assert!(matches!(
            LeaderboardSort::from_str("pnl"),
            Err(ValidationError::UnknownSort(_))
        ));
    }
}
