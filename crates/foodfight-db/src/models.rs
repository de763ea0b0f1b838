//! Database models - mapped from SQLite tables
//!
//! SQLite stores prices as TEXT and difficulty as its wire string; the row
//! types here own the raw columns and convert into domain types at the
//! repository boundary.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

use foodfight_types::{BattleStats, Difficulty, LeaderboardEntry, Meal, MealId};

use crate::error::DbError;

/// Raw `meals` row
#[derive(Debug, Clone, FromRow)]
pub struct MealRow {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub price: String,
    pub difficulty: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<MealRow> for Meal {
    type Error = DbError;

    fn try_from(row: MealRow) -> Result<Self, Self::Error> {
        let price = Decimal::from_str(&row.price)
            .map_err(|e| DbError::Decode(format!("price '{}': {}", row.price, e)))?;
        let difficulty = Difficulty::from_str(&row.difficulty)
            .map_err(|e| DbError::Decode(e.to_string()))?;

        Ok(Meal {
            id: MealId(row.id),
            name: row.name,
            cuisine: row.cuisine,
            price,
            difficulty,
            deleted: row.deleted,
            created_at: row.created_at,
        })
    }
}

/// Raw leaderboard row: a meal joined with its battle counters
#[derive(Debug, Clone, FromRow)]
pub struct LeaderboardRow {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub price: String,
    pub difficulty: String,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub wins: i64,
    pub losses: i64,
}

impl TryFrom<LeaderboardRow> for LeaderboardEntry {
    type Error = DbError;

    fn try_from(row: LeaderboardRow) -> Result<Self, Self::Error> {
        let stats = BattleStats {
            wins: row.wins as u32,
            losses: row.losses as u32,
        };
        let meal = Meal::try_from(MealRow {
            id: row.id,
            name: row.name,
            cuisine: row.cuisine,
            price: row.price,
            difficulty: row.difficulty,
            deleted: row.deleted,
            created_at: row.created_at,
        })?;

        Ok(LeaderboardEntry::new(meal, stats))
    }
}
