//! Catalog error types.

use clipdock_models::VideoId;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("video not found: {0}")]
    NotFound(VideoId),

    #[error("video already exists: {0}")]
    AlreadyExists(VideoId),

    /// Backend failure from a durable `VideoCatalog` implementation
    /// (connection loss, query errors). The in-memory catalog never
    /// produces this variant.
    #[error("store error: {0}")]
    Store(String),
}

impl CatalogError {
    /// Wrap a backend error message from a durable catalog implementation.
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }
}
