//! Object storage backends and key resolution.
//!
//! This crate provides:
//! - Whole-object uploads to an S3-compatible bucket (video payloads)
//! - A local filesystem asset store (thumbnails)
//! - Deterministic storage key and public URL derivation

pub mod assets;
pub mod client;
pub mod error;
pub mod keys;

pub use assets::AssetStore;
pub use client::{ObjectStore, S3Client, S3Config};
pub use error::{StorageError, StorageResult};
pub use keys::{thumbnail_key, video_key};
