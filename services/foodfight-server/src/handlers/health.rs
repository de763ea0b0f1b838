//! Health check handlers

use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::json;

use crate::dto::ApiResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// Liveness check; verifies nothing beyond the process itself
pub async fn health() -> Json<ApiResponse> {
    Json(ApiResponse::success(json!({
        "message": "Service is running",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Storage liveness check (`SELECT 1` against SQLite)
pub async fn db_check(State(state): State<Arc<AppState>>) -> ApiResult<Json<ApiResponse>> {
    state.db.health_check().await?;
    Ok(Json(ApiResponse::success(json!({
        "message": "Database connection is healthy",
    }))))
}
