//! Deterministic storage key derivation.
//!
//! Keys carry no randomness: re-uploading the same video with the same
//! resulting orientation overwrites the previous object at the same key.

use clipdock_models::{Orientation, VideoId};

/// Key for a thumbnail under the local asset root: `{video_id}.{ext}`.
pub fn thumbnail_key(id: VideoId, ext: &str) -> String {
    format!("{id}.{ext}")
}

/// Key for a video object in the remote bucket:
/// `{orientation}/{video_id}.mp4`.
pub fn video_key(id: VideoId, orientation: Orientation) -> String {
    format!("{orientation}/{id}.mp4")
}
