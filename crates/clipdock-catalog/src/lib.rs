//! Video metadata catalog.
//!
//! This crate provides:
//! - The [`VideoCatalog`] trait the upload pipeline commits metadata through
//! - An in-memory implementation for single-node deployments and tests

pub mod error;
pub mod memory;

pub use error::{CatalogError, CatalogResult};
pub use memory::MemoryCatalog;

use async_trait::async_trait;
use clipdock_models::{VideoId, VideoRecord};

/// Lookup and mutation of video records.
///
/// The store is an external collaborator with independent consistency; the
/// upload pipeline performs exactly one `update_video` per successful upload.
#[async_trait]
pub trait VideoCatalog: Send + Sync {
    /// Register a new record. Fails if the id already exists.
    async fn create_video(&self, record: VideoRecord) -> CatalogResult<()>;

    /// Fetch a record by id.
    async fn get_video(&self, id: VideoId) -> CatalogResult<VideoRecord>;

    /// Write back a mutated record, returning it as stored.
    async fn update_video(&self, record: VideoRecord) -> CatalogResult<VideoRecord>;

    /// List all records owned by `user_id`, newest first.
    async fn list_videos(&self, user_id: &str) -> CatalogResult<Vec<VideoRecord>>;
}
