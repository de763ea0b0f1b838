//! FoodFight Database Layer
//!
//! SQLite persistence for the meal catalog and battle statistics.
//!
//! # Architecture
//!
//! - **meals**: the catalog, with a soft-delete flag for retired meals
//! - **battle_stats**: cumulative win/loss counters, created lazily and never
//!   reset by catalog operations
//!
//! # Repository Pattern
//!
//! Each domain has its own repository with CRUD and domain-specific queries.
//! Battle side effects (both counters plus loser retirement) are applied in
//! one transaction so leaderboard readers never observe a half-recorded
//! battle.

pub mod config;
pub mod error;
pub mod models;
pub mod repos;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

pub use config::DatabaseConfig;
pub use error::{DbError, DbResult};
pub use repos::{MealRepo, StatsRepo};

/// Database connection pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to SQLite, creating the database file if needed
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        info!("Connecting to SQLite: {}", config.url);

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| DbError::Connection(format!("SQLite URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection(format!("SQLite: {}", e)))?;

        info!("Connected to SQLite");
        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> DbResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration(e.to_string()))?;
        info!("Migrations complete");
        Ok(())
    }

    /// Storage liveness check
    pub async fn health_check(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    /// The underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create repository instances
    pub fn meal_repo(&self) -> MealRepo {
        MealRepo::new(self.pool.clone())
    }

    pub fn stats_repo(&self) -> StatsRepo {
        StatsRepo::new(self.pool.clone())
    }
}
