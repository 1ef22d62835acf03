//! API error types.

use std::sync::OnceLock;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use clipdock_catalog::CatalogError;
use clipdock_media::MediaError;
use clipdock_models::UnsupportedMediaType;
use clipdock_storage::StorageError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Whether server-side error details are redacted from responses. Set once
/// at startup from the resolved config; defaults to verbose when unset.
static REDACT_INTERNAL_DETAILS: OnceLock<bool> = OnceLock::new();

pub fn set_redact_internal_details(redact: bool) {
    let _ = REDACT_INTERNAL_DETAILS.set(redact);
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large (limit {limit} bytes)")]
    PayloadTooLarge { limit: u64 },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Metadata commit failed: {0}")]
    MetadataCommit(String),
}

impl ApiError {
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) | ApiError::Storage(_) | ApiError::MetadataCommit(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn response_detail(&self, redact: bool) -> String {
        match self {
            ApiError::Internal(_) | ApiError::Storage(_) | ApiError::MetadataCommit(_)
                if redact =>
            {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::NotFound(id) => Self::NotFound(format!("video {id} not found")),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<MediaError> for ApiError {
    fn from(e: MediaError) -> Self {
        match e {
            MediaError::PayloadTooLarge { limit } => Self::PayloadTooLarge { limit },
            other => Self::Internal(other.to_string()),
        }
    }
}

impl From<UnsupportedMediaType> for ApiError {
    fn from(e: UnsupportedMediaType) -> Self {
        Self::Validation(e.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Don't expose internal error details in production
        let redact = REDACT_INTERNAL_DETAILS.get().copied().unwrap_or(false);
        let body = ErrorResponse {
            detail: self.response_detail(redact),
        };

        (status, Json(body)).into_response()
    }
}
