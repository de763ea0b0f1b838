//! Validation errors for FoodFight domain types
//!
//! All errors are explicit; malformed input never constructs a domain value.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating catalog input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Meal name was empty or whitespace
    #[error("Meal name must not be empty")]
    EmptyName,

    /// Cuisine was empty or whitespace
    #[error("Cuisine must not be empty")]
    EmptyCuisine,

    /// Price was zero or negative
    #[error("Invalid price: {0}. Price must be a positive number")]
    NonPositivePrice(Decimal),

    /// Difficulty string was not one of the known tiers
    #[error("Invalid difficulty level: {0}. Must be 'LOW', 'MED', or 'HIGH'")]
    UnknownDifficulty(String),

    /// Leaderboard sort key was not recognised
    #[error("Invalid sort_by parameter: {0}. Must be 'win_ratio' or 'wins'")]
    UnknownSort(String),
}

/// Result type for validation
pub type ValidationResult<T> = Result<T, ValidationError>;
