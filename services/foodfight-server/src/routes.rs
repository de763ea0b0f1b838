//! API routes
//!
//! Route definitions for all endpoints, plus the CORS and tracing layers.

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::state::AppState;

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/api/health", get(handlers::health::health))
        .route("/api/db-check", get(handlers::health::db_check))
        // Catalog
        .route("/api/create-meal", post(handlers::meals::create_meal))
        .route("/api/clear-meals", delete(handlers::meals::clear_meals))
        .route("/api/delete-meal/:id", delete(handlers::meals::delete_meal))
        .route("/api/get-meal-by-id/:id", get(handlers::meals::get_meal_by_id))
        .route(
            "/api/get-meal-by-name/:name",
            get(handlers::meals::get_meal_by_name),
        )
        // Arena
        .route("/api/prep-combatant", post(handlers::battle::prep_combatant))
        .route("/api/get-combatants", get(handlers::battle::get_combatants))
        .route(
            "/api/clear-combatants",
            post(handlers::battle::clear_combatants),
        )
        .route("/api/battle", get(handlers::battle::battle))
        .route("/api/leaderboard", get(handlers::battle::leaderboard))
        // Layers
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
