//! Meal catalog repository

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use foodfight_types::{Meal, MealId, NewMeal};

use crate::error::{DbError, DbResult};
use crate::models::MealRow;

pub struct MealRepo {
    pool: SqlitePool,
}

impl MealRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a validated meal; the name is unique across the catalog
    pub async fn create(&self, new_meal: &NewMeal) -> DbResult<Meal> {
        let row = sqlx::query_as::<_, MealRow>(
            r#"
            INSERT INTO meals (name, cuisine, price, difficulty, deleted, created_at)
            VALUES (?1, ?2, ?3, ?4, 0, ?5)
            RETURNING id, name, cuisine, price, difficulty, deleted, created_at
            "#,
        )
        .bind(&new_meal.name)
        .bind(&new_meal.cuisine)
        .bind(new_meal.price.to_string())
        .bind(new_meal.difficulty.as_str())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db) = e {
                if db.is_unique_violation() {
                    return DbError::Duplicate(format!(
                        "Meal with name '{}' already exists",
                        new_meal.name
                    ));
                }
            }
            DbError::Query(e)
        })?;

        info!(meal = %row.name, id = row.id, "meal added to the catalog");
        row.try_into()
    }

    /// Fetch a non-deleted meal by id
    pub async fn get_by_id(&self, id: MealId) -> DbResult<Meal> {
        let row = sqlx::query_as::<_, MealRow>(
            "SELECT id, name, cuisine, price, difficulty, deleted, created_at
             FROM meals WHERE id = ?1",
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            None => Err(DbError::NotFound(format!("Meal with ID {} not found", id))),
            Some(row) if row.deleted => Err(DbError::NotFound(format!(
                "Meal with ID {} has been deleted",
                id
            ))),
            Some(row) => row.try_into(),
        }
    }

    /// Fetch a non-deleted meal by name
    pub async fn get_by_name(&self, name: &str) -> DbResult<Meal> {
        let row = sqlx::query_as::<_, MealRow>(
            "SELECT id, name, cuisine, price, difficulty, deleted, created_at
             FROM meals WHERE name = ?1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            None => Err(DbError::NotFound(format!(
                "Meal with name '{}' not found",
                name
            ))),
            Some(row) if row.deleted => Err(DbError::NotFound(format!(
                "Meal with name '{}' has been deleted",
                name
            ))),
            Some(row) => row.try_into(),
        }
    }

    /// Soft-delete a meal by id
    ///
    /// Deleting a meal that is already deleted is an error, distinct from an
    /// unknown id.
    pub async fn soft_delete(&self, id: MealId) -> DbResult<()> {
        let mut tx = self.pool.begin().await?;

        let deleted: Option<bool> = sqlx::query_scalar("SELECT deleted FROM meals WHERE id = ?1")
            .bind(id.as_i64())
            .fetch_optional(&mut *tx)
            .await?;

        match deleted {
            None => {
                return Err(DbError::NotFound(format!("Meal with ID {} not found", id)));
            }
            Some(true) => {
                return Err(DbError::NotFound(format!(
                    "Meal with ID {} has already been deleted",
                    id
                )));
            }
            Some(false) => {}
        }

        sqlx::query("UPDATE meals SET deleted = 1 WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!(id = id.as_i64(), "meal marked as deleted");
        Ok(())
    }

    /// Delete every meal row
    ///
    /// Battle stats are intentionally left in place; orphaned counters simply
    /// drop out of the leaderboard join.
    pub async fn clear(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM meals").execute(&self.pool).await?;
        info!(removed = result.rows_affected(), "catalog cleared");
        Ok(result.rows_affected())
    }
}
