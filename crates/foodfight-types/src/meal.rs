//! Meal catalog types
//!
//! `Meal` is the catalog record; `NewMeal` is the validated creation input.
//! Meals are soft-deleted: a retired meal keeps its row (and its battle
//! history) but is invisible to lookups and staging.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Unique identifier for a meal (catalog rowid)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MealId(pub i64);

impl MealId {
    /// Get the raw id
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MealId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Preparation difficulty tier, ordered from easiest to hardest
///
/// Wire format is the uppercase tier name (`LOW`, `MED`, `HIGH`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Low,
    Med,
    High,
}

impl Difficulty {
    /// All tiers in ascending order
    pub const ALL: [Difficulty; 3] = [Difficulty::Low, Difficulty::Med, Difficulty::High];

    /// Wire/storage representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Low => "LOW",
            Difficulty::Med => "MED",
            Difficulty::High => "HIGH",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(Difficulty::Low),
            "MED" => Ok(Difficulty::Med),
            "HIGH" => Ok(Difficulty::High),
            other => Err(ValidationError::UnknownDifficulty(other.to_string())),
        }
    }
}

/// A meal in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    /// Catalog id
    pub id: MealId,
    /// Meal name, unique across the catalog
    #[serde(rename = "meal")]
    pub name: String,
    /// Cuisine label
    pub cuisine: String,
    /// Price, strictly positive
    pub price: Decimal,
    /// Preparation difficulty tier
    pub difficulty: Difficulty,
    /// Soft-delete flag; set when the meal loses a battle or is deleted
    pub deleted: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Validated input for creating a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMeal {
    #[serde(rename = "meal")]
    pub name: String,
    pub cuisine: String,
    pub price: Decimal,
    pub difficulty: Difficulty,
}

impl NewMeal {
    /// Build a validated `NewMeal` from raw request fields
    ///
    /// The difficulty arrives as a string so that an unknown tier surfaces as
    /// a `ValidationError` rather than a deserialization failure.
    pub fn parse(
        name: &str,
        cuisine: &str,
        price: Decimal,
        difficulty: &str,
    ) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if cuisine.trim().is_empty() {
            return Err(ValidationError::EmptyCuisine);
        }
        if price <= Decimal::ZERO {
            return Err(ValidationError::NonPositivePrice(price));
        }
        let difficulty = Difficulty::from_str(difficulty)?;

        Ok(Self {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            price,
            difficulty,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_difficulty_round_trip() {
        for tier in Difficulty::ALL {
            assert_eq!(Difficulty::from_str(tier.as_str()).unwrap(), tier);
        }
    }

    #[test]
    fn test_difficulty_ordering() {
        assert!(Difficulty::Low < Difficulty::Med);
        assert!(Difficulty::Med < Difficulty::High);
    }

    #[test]
    fn test_difficulty_rejects_unknown_tier() {
        let err = Difficulty::from_str("MEDIUM").unwrap_err();
        assert_eq!(err, ValidationError::UnknownDifficulty("MEDIUM".to_string()));
    }

    #[test]
    fn test_new_meal_valid() {
        let meal = NewMeal::parse("Pad Thai", "Thai", dec!(11.50), "MED").unwrap();
        assert_eq!(meal.name, "Pad Thai");
        assert_eq!(meal.difficulty, Difficulty::Med);
    }

    #[test]
    fn test_new_meal_rejects_empty_name() {
        let err = NewMeal::parse("  ", "Thai", dec!(11.50), "MED").unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn test_new_meal_rejects_empty_cuisine() {
        let err = NewMeal::parse("Pad Thai", "", dec!(11.50), "MED").unwrap_err();
        assert_eq!(err, ValidationError::EmptyCuisine);
    }

    #[test]
    fn test_new_meal_rejects_non_positive_price() {
        assert!(matches!(
            NewMeal::parse("Pad Thai", "Thai", dec!(0), "MED"),
            Err(ValidationError::NonPositivePrice(_))
        ));
        assert!(matches!(
            NewMeal::parse("Pad Thai", "Thai", dec!(-3.20), "MED"),
            Err(ValidationError::NonPositivePrice(_))
        ));
    }

    #[test]
    fn test_meal_serializes_name_as_meal() {
        let meal = NewMeal::parse("Ramen", "Japanese", dec!(9.99), "HIGH").unwrap();
        let json = serde_json::to_value(&meal).unwrap();
        assert_eq!(json["meal"], "Ramen");
        assert_eq!(json["difficulty"], "HIGH");
    }
}
