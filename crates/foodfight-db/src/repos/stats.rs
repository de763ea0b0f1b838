//! Battle stats repository and leaderboard queries

use sqlx::SqlitePool;
use tracing::info;

use foodfight_types::{BattleStats, LeaderboardEntry, LeaderboardSort, MealId};

use crate::error::DbResult;
use crate::models::LeaderboardRow;

const RECORD_WIN: &str = "INSERT INTO battle_stats (meal_id, wins, losses) VALUES (?1, 1, 0)
     ON CONFLICT(meal_id) DO UPDATE SET wins = wins + 1";

const RECORD_LOSS: &str = "INSERT INTO battle_stats (meal_id, wins, losses) VALUES (?1, 0, 1)
     ON CONFLICT(meal_id) DO UPDATE SET losses = losses + 1";

pub struct StatsRepo {
    pool: SqlitePool,
}

impl StatsRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record one battle result for a meal, creating its counters on first
    /// touch
    pub async fn record(&self, meal_id: MealId, won: bool) -> DbResult<()> {
        let sql = if won { RECORD_WIN } else { RECORD_LOSS };
        sqlx::query(sql)
            .bind(meal_id.as_i64())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Apply a resolved battle as a single transaction
    ///
    /// Updates both counters and retires the loser's meal; a concurrent
    /// leaderboard read sees either none of it or all of it.
    pub async fn record_battle(&self, winner: MealId, loser: MealId) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(RECORD_WIN)
            .bind(winner.as_i64())
            .execute(&mut *tx)
            .await?;
        sqlx::query(RECORD_LOSS)
            .bind(loser.as_i64())
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE meals SET deleted = 1 WHERE id = ?1")
            .bind(loser.as_i64())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!(
            winner = winner.as_i64(),
            loser = loser.as_i64(),
            "battle recorded, loser retired"
        );
        Ok(())
    }

    /// Current counters for a meal; zero record if it has never fought
    pub async fn get(&self, meal_id: MealId) -> DbResult<BattleStats> {
        let row: Option<(i64, i64)> =
            sqlx::query_as("SELECT wins, losses FROM battle_stats WHERE meal_id = ?1")
                .bind(meal_id.as_i64())
                .fetch_optional(&self.pool)
                .await?;

        Ok(row
            .map(|(wins, losses)| BattleStats {
                wins: wins as u32,
                losses: losses as u32,
            })
            .unwrap_or_default())
    }

    /// Ranked leaderboard of meals with at least one battle
    ///
    /// Ordering: win ratio (or raw wins) descending, then battle count
    /// descending, then name ascending. Retired meals keep their place on
    /// the board unless `include_retired` is false.
    pub async fn leaderboard(
        &self,
        sort: LeaderboardSort,
        limit: Option<i64>,
        include_retired: bool,
    ) -> DbResult<Vec<LeaderboardEntry>> {
        let filter = if include_retired {
            ""
        } else {
            "AND m.deleted = 0"
        };
        let order = match sort {
            LeaderboardSort::WinRatio => {
                "(CAST(s.wins AS REAL) / (s.wins + s.losses)) DESC, (s.wins + s.losses) DESC, m.name ASC"
            }
            LeaderboardSort::Wins => "s.wins DESC, (s.wins + s.losses) DESC, m.name ASC",
        };
        let sql = format!(
            "SELECT m.id, m.name, m.cuisine, m.price, m.difficulty, m.deleted, m.created_at,
                    s.wins, s.losses
             FROM meals m
             JOIN battle_stats s ON s.meal_id = m.id
             WHERE s.wins + s.losses > 0 {}
             ORDER BY {}
             LIMIT ?1",
            filter, order
        );

        let rows = sqlx::query_as::<_, LeaderboardRow>(&sql)
            .bind(limit.unwrap_or(-1))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(LeaderboardEntry::try_from).collect()
    }
}
