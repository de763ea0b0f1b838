//! FoodFight HTTP service
//!
//! Thin axum layer over the arena engine and the SQLite catalog. The router
//! is exposed as a library so integration tests can drive it in-process.
//!
//! # API Structure
//!
//! ```text
//! /api/
//! ├── /health             - liveness
//! ├── /db-check           - storage liveness
//! ├── /create-meal        - catalog create
//! ├── /clear-meals        - catalog wipe
//! ├── /delete-meal/{id}   - catalog soft-delete
//! ├── /get-meal-by-id     - catalog lookup
//! ├── /get-meal-by-name   - catalog lookup
//! ├── /prep-combatant     - stage a combatant
//! ├── /get-combatants     - list staged combatants
//! ├── /clear-combatants   - empty the arena
//! ├── /battle             - resolve a battle
//! └── /leaderboard        - ranked battle history
//! ```
//!
//! Every response uses the `{"status": "success" | "error", ...}` envelope.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;
