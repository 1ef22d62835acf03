//! Bounded temp-file staging for uploaded payloads.

use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::error::{MediaError, MediaResult};

/// An uploaded payload staged to a temporary file.
///
/// The handle exclusively owns the temp file for the duration of one upload
/// request. It enforces a byte cap while the inbound stream is consumed, and
/// removes the file when dropped on any exit path. Removal failure is logged
/// and never escalated.
pub struct StagedUpload {
    temp: Option<NamedTempFile>,
    path: PathBuf,
    file: File,
    written: u64,
    max_bytes: u64,
}

impl StagedUpload {
    /// Create an empty staging file accepting at most `max_bytes`.
    pub async fn create(max_bytes: u64) -> MediaResult<Self> {
        let temp = NamedTempFile::new()?;
        let path = temp.path().to_path_buf();
        let file = File::from_std(temp.as_file().try_clone()?);
        Ok(Self {
            temp: Some(temp),
            path,
            file,
            written: 0,
            max_bytes,
        })
    }

    /// Append one chunk of the inbound stream.
    ///
    /// Fails with [`MediaError::PayloadTooLarge`] once the cap would be
    /// exceeded; the payload is never silently truncated.
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> MediaResult<()> {
        let new_len = self.written + chunk.len() as u64;
        if new_len > self.max_bytes {
            return Err(MediaError::PayloadTooLarge {
                limit: self.max_bytes,
            });
        }
        self.file.write_all(chunk).await?;
        self.written = new_len;
        Ok(())
    }

    /// Flush buffered writes so downstream consumers see the full content
    /// from byte 0 when they reopen the file by path.
    pub async fn finish(&mut self) -> MediaResult<()> {
        self.file.flush().await?;
        Ok(())
    }

    /// Path of the staged file, valid until the handle is dropped.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of bytes staged so far.
    pub fn len(&self) -> u64 {
        self.written
    }

    pub fn is_empty(&self) -> bool {
        self.written == 0
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        if let Some(temp) = self.temp.take() {
            if let Err(e) = temp.close() {
                warn!(path = %self.path.display(), error = %e, "Failed to remove staged upload");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stages_chunks_and_reads_back() {
        let mut staged = StagedUpload::create(64).await.unwrap();
        staged.write_chunk(b"hello ").await.unwrap();
        staged.write_chunk(b"world").await.unwrap();
        staged.finish().await.unwrap();

        assert_eq!(staged.len(), 11);
        let content = std::fs::read(staged.path()).unwrap();
        assert_eq!(content, b"hello world");
    }

    #[tokio::test]
    async fn rejects_payload_over_cap() {
        let mut staged = StagedUpload::create(8).await.unwrap();
        staged.write_chunk(b"12345").await.unwrap();
        let err = staged.write_chunk(b"67890").await.unwrap_err();
        assert!(matches!(err, MediaError::PayloadTooLarge { limit: 8 }));
        // Nothing past the cap was written.
        assert_eq!(staged.len(), 5);
    }

    #[tokio::test]
    async fn removes_file_on_drop() {
        let staged = StagedUpload::create(8).await.unwrap();
        let path = staged.path().to_path_buf();
        assert!(path.exists());
        drop(staged);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn removes_file_on_drop_after_cap_failure() {
        let mut staged = StagedUpload::create(2).await.unwrap();
        assert!(staged.write_chunk(b"xxx").await.is_err());
        let path = staged.path().to_path_buf();
        drop(staged);
        assert!(!path.exists());
    }
}
