//! API error handling
//!
//! Every error from the domain crates is recovered here and surfaced as the
//! `{"status": "error", "message": ...}` envelope; nothing crashes the
//! process.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use foodfight_arena::ArenaError;
use foodfight_db::DbError;
use foodfight_types::ValidationError;

use crate::dto::ApiResponse;

/// API result type
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced at the request boundary
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Arena(#[from] ArenaError),

    #[error(transparent)]
    Db(#[from] DbError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Arena(_) => StatusCode::BAD_REQUEST,
            ApiError::Db(DbError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Db(DbError::Duplicate(_)) => StatusCode::BAD_REQUEST,
            ApiError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Human-readable message for the envelope
    fn message(&self) -> String {
        match self {
            // The repo messages already read as full sentences.
            ApiError::Db(DbError::NotFound(msg)) | ApiError::Db(DbError::Duplicate(msg)) => {
                msg.clone()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(ApiResponse::error(self.message()))).into_response()
    }
}
