//! In-memory catalog implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use clipdock_models::{VideoId, VideoRecord};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::VideoCatalog;

/// Catalog backed by process memory. Suitable for single-node deployments
/// and tests; the trait seam keeps a durable store swappable.
#[derive(Default)]
pub struct MemoryCatalog {
    records: RwLock<HashMap<VideoId, VideoRecord>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoCatalog for MemoryCatalog {
    async fn create_video(&self, record: VideoRecord) -> CatalogResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(CatalogError::AlreadyExists(record.id));
        }
        debug!(video_id = %record.id, user_id = %record.user_id, "Created video record");
        records.insert(record.id, record);
        Ok(())
    }

    async fn get_video(&self, id: VideoId) -> CatalogResult<VideoRecord> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }

    async fn update_video(&self, mut record: VideoRecord) -> CatalogResult<VideoRecord> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Err(CatalogError::NotFound(record.id));
        }
        record.updated_at = Utc::now();
        records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list_videos(&self, user_id: &str) -> CatalogResult<Vec<VideoRecord>> {
        let records = self.records.read().await;
        let mut owned: Vec<VideoRecord> = records
            .values()
            .filter(|record| record.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_get_update_round_trip() {
        let catalog = MemoryCatalog::new();
        let record = VideoRecord::new("user-1");
        let id = record.id;

        catalog.create_video(record).await.unwrap();

        let mut fetched = catalog.get_video(id).await.unwrap();
        assert!(fetched.video_url.is_none());

        fetched.video_url = Some("https://example.com/other/v.mp4".to_string());
        catalog.update_video(fetched).await.unwrap();

        let updated = catalog.get_video(id).await.unwrap();
        assert_eq!(
            updated.video_url.as_deref(),
            Some("https://example.com/other/v.mp4")
        );
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let catalog = MemoryCatalog::new();
        let err = catalog.get_video(VideoId::new()).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let catalog = MemoryCatalog::new();
        let record = VideoRecord::new("user-1");
        let err = catalog.update_video(record).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[tokio::test]
    async fn duplicate_create_is_rejected() {
        let catalog = MemoryCatalog::new();
        let record = VideoRecord::new("user-1");
        catalog.create_video(record.clone()).await.unwrap();
        let err = catalog.create_video(record).await.unwrap_err();
        assert!(matches!(err, CatalogError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn list_returns_only_owned_records_newest_first() {
        let catalog = MemoryCatalog::new();
        let first = VideoRecord::new("user-1");
        let first_id = first.id;
        catalog.create_video(first).await.unwrap();

        let mut second = VideoRecord::new("user-1");
        second.created_at = second.created_at + chrono::Duration::seconds(1);
        let second_id = second.id;
        catalog.create_video(second).await.unwrap();

        catalog.create_video(VideoRecord::new("user-2")).await.unwrap();

        let listed = catalog.list_videos("user-1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second_id);
        assert_eq!(listed[1].id, first_id);
    }

    #[tokio::test]
    async fn update_bumps_updated_at() {
        let catalog = MemoryCatalog::new();
        let record = VideoRecord::new("user-1");
        let id = record.id;
        let created_at = record.created_at;
        catalog.create_video(record).await.unwrap();

        let fetched = catalog.get_video(id).await.unwrap();
        catalog.update_video(fetched).await.unwrap();

        let updated = catalog.get_video(id).await.unwrap();
        assert!(updated.updated_at >= created_at);
    }
}
