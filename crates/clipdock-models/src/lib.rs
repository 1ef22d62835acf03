//! Shared data models for the clipdock backend.
//!
//! This crate provides:
//! - Video identity and record types
//! - Orientation classification for video streams
//! - Upload kinds and content-type validation

pub mod orientation;
pub mod upload;
pub mod video;

pub use orientation::Orientation;
pub use upload::{AssetKind, UnsupportedMediaType};
pub use video::{VideoId, VideoRecord};
