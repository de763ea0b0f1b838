//! Request and response envelope types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Response envelope: `{"status": "success", ...}` on success,
/// `{"status": "error", "message": "..."}` on failure
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn success(body: serde_json::Value) -> Self {
        Self {
            status: "success",
            body,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            body: json!({ "message": message.into() }),
        }
    }
}

/// Body of `POST /api/create-meal`
///
/// Difficulty arrives as a raw string so an unknown tier surfaces as a
/// validation error in the envelope instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateMealRequest {
    pub meal: String,
    pub cuisine: String,
    pub price: Decimal,
    pub difficulty: String,
}

/// Body of `POST /api/prep-combatant`
#[derive(Debug, Deserialize)]
pub struct PrepCombatantRequest {
    pub meal: String,
}

/// Query parameters of `GET /api/leaderboard`
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    pub sort: Option<String>,
    pub limit: Option<i64>,
}
