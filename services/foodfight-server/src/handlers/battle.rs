//! Arena and battle handlers
//!
//! The arena lock is only held around synchronous in-memory work; catalog
//! reads happen before it and stat/retirement writes after it. The small
//! race this leaves (a meal independently deleted mid-battle) resolves as a
//! not-found on the next lookup, never as corruption.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::json;

use foodfight_types::LeaderboardSort;

use crate::dto::{ApiResponse, LeaderboardQuery, PrepCombatantRequest};
use crate::error::ApiResult;
use crate::state::AppState;

/// `POST /api/prep-combatant`
pub async fn prep_combatant(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PrepCombatantRequest>,
) -> ApiResult<Json<ApiResponse>> {
    let meal = state.db.meal_repo().get_by_name(&req.meal).await?;

    let combatants = {
        let mut arena = state.arena.lock();
        arena.prepare(meal)?;
        arena.combatants().to_vec()
    };

    Ok(Json(ApiResponse::success(json!({
        "combatants": combatants,
    }))))
}

/// `GET /api/get-combatants`
pub async fn get_combatants(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    let combatants = state.arena.lock().combatants().to_vec();
    Json(ApiResponse::success(json!({ "combatants": combatants })))
}

/// `POST /api/clear-combatants`
pub async fn clear_combatants(State(state): State<Arc<AppState>>) -> Json<ApiResponse> {
    state.arena.lock().clear();
    Json(ApiResponse::success(json!({
        "message": "Combatants cleared",
    })))
}

/// `GET /api/battle`
pub async fn battle(State(state): State<Arc<AppState>>) -> ApiResult<Json<ApiResponse>> {
    let outcome = {
        let mut arena = state.arena.lock();
        let mut rng = state.rng.lock();
        arena.resolve(&mut *rng)?
    };

    // Both counters and the loser's retirement commit as one transaction,
    // outside the arena lock.
    state
        .db
        .stats_repo()
        .record_battle(outcome.winner.id, outcome.loser.id)
        .await?;

    Ok(Json(ApiResponse::success(json!({
        "winner": outcome.winner,
        "winner_score": outcome.winner_score,
        "loser": outcome.loser.name,
        "loser_score": outcome.loser_score,
    }))))
}

/// `GET /api/leaderboard`
pub async fn leaderboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeaderboardQuery>,
) -> ApiResult<Json<ApiResponse>> {
    let sort = match query.sort.as_deref() {
        Some(raw) => LeaderboardSort::from_str(raw)?,
        None => LeaderboardSort::default(),
    };
    let limit = query.limit.filter(|l| *l >= 0);

    let entries = state
        .db
        .stats_repo()
        .leaderboard(sort, limit, state.include_retired)
        .await?;

    Ok(Json(ApiResponse::success(json!({
        "leaderboard": entries,
    }))))
}
