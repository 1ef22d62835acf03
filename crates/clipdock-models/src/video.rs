//! Video identity and metadata record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a video record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(pub Uuid);

impl VideoId {
    /// Generate a new random video ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from a string representation.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for VideoId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for VideoId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// A registered video and its resolved media URLs.
///
/// The record is created before any upload; the upload pipeline sets exactly
/// one URL field per successful upload. Only the owning user may mutate URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Unique video ID
    pub id: VideoId,

    /// User ID (owner)
    pub user_id: String,

    /// Video title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Video description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Public URL of the thumbnail, once uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,

    /// Public URL of the video object, once uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl VideoRecord {
    /// Create a fresh record owned by `user_id`, with no media attached yet.
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: VideoId::new(),
            user_id: user_id.into(),
            title: None,
            description: None,
            thumbnail_url: None,
            video_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `user_id` owns this record.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_id_round_trips_through_string() {
        let id = VideoId::new();
        let parsed = VideoId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn video_id_rejects_garbage() {
        assert!(VideoId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn new_record_has_no_media_urls() {
        let record = VideoRecord::new("user-1");
        assert!(record.thumbnail_url.is_none());
        assert!(record.video_url.is_none());
        assert!(record.is_owned_by("user-1"));
        assert!(!record.is_owned_by("user-2"));
    }

    #[test]
    fn record_serializes_without_empty_urls() {
        let record = VideoRecord::new("user-1");
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("thumbnail_url").is_none());
        assert!(json.get("video_url").is_none());
    }
}
