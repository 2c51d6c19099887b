use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shortcut_core::StorageError;
use thiserror::Error;

use crate::model::ErrorResponse;

pub type Result<T> = std::result::Result<T, AppError>;

/// Failures a handler reports to the client. The display text is the exact
/// message placed in the `error` field of the response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Invalid request format")]
    InvalidRequest,
    #[error("URL not found")]
    NotFound,
    #[error("Short URL already exists")]
    AlreadyExists,
    #[error("Internal server error")]
    LookupFailed,
    #[error("Failed to save URL")]
    SaveFailed,
}

impl AppError {
    /// Classifies a storage error raised by a lookup.
    pub fn from_lookup(error: StorageError) -> Self {
        if error.is_not_found() {
            AppError::NotFound
        } else {
            AppError::LookupFailed
        }
    }

    /// Classifies a storage error raised by a create.
    pub fn from_create(error: StorageError) -> Self {
        if error.is_already_exists() {
            AppError::AlreadyExists
        } else {
            AppError::SaveFailed
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::AlreadyExists => StatusCode::CONFLICT,
            AppError::LookupFailed | AppError::SaveFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
