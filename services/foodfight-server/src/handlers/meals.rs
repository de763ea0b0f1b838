//! Meal catalog handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::json;

use foodfight_types::{MealId, NewMeal};

use crate::dto::{ApiResponse, CreateMealRequest};
use crate::error::ApiResult;
use crate::state::AppState;

/// `POST /api/create-meal`
pub async fn create_meal(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMealRequest>,
) -> ApiResult<Json<ApiResponse>> {
    let new_meal = NewMeal::parse(&req.meal, &req.cuisine, req.price, &req.difficulty)?;
    let meal = state.db.meal_repo().create(&new_meal).await?;

    Ok(Json(ApiResponse::success(json!({ "meal": meal }))))
}

/// `DELETE /api/clear-meals`
pub async fn clear_meals(State(state): State<Arc<AppState>>) -> ApiResult<Json<ApiResponse>> {
    let removed = state.db.meal_repo().clear().await?;
    Ok(Json(ApiResponse::success(json!({ "cleared": removed }))))
}

/// `DELETE /api/delete-meal/{id}`
pub async fn delete_meal(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse>> {
    state.db.meal_repo().soft_delete(MealId(id)).await?;
    Ok(Json(ApiResponse::success(json!({
        "message": format!("Meal {} deleted", id),
    }))))
}

/// `GET /api/get-meal-by-id/{id}`
pub async fn get_meal_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ApiResponse>> {
    let meal = state.db.meal_repo().get_by_id(MealId(id)).await?;
    Ok(Json(ApiResponse::success(json!({ "meal": meal }))))
}

/// `GET /api/get-meal-by-name/{name}`
///
/// Axum percent-decodes the path segment, so names with spaces arrive intact.
pub async fn get_meal_by_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<ApiResponse>> {
    let meal = state.db.meal_repo().get_by_name(&name).await?;
    Ok(Json(ApiResponse::success(json!({ "meal": meal }))))
}
