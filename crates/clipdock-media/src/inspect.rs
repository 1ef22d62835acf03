//! Stream inspection and orientation classification.

use async_trait::async_trait;
use std::path::Path;

use clipdock_models::Orientation;

use crate::error::{MediaError, MediaResult};
use crate::probe::{probe_streams, StreamDescriptor};

/// Inspects a local media file and reports its stream descriptors.
///
/// The upload pipeline depends on this trait rather than on `ffprobe`
/// directly, so tests can substitute a stub that never spawns a subprocess.
#[async_trait]
pub trait StreamInspector: Send + Sync {
    async fn inspect(&self, path: &Path) -> MediaResult<Vec<StreamDescriptor>>;
}

/// Inspector backed by the `ffprobe` subprocess.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfprobeInspector;

#[async_trait]
impl StreamInspector for FfprobeInspector {
    async fn inspect(&self, path: &Path) -> MediaResult<Vec<StreamDescriptor>> {
        probe_streams(path).await
    }
}

/// Derive the orientation class from probed streams.
///
/// Only the first stream tagged `video` is examined; additional video
/// streams are ignored.
pub fn orientation_of(streams: &[StreamDescriptor]) -> MediaResult<Orientation> {
    let stream = streams
        .iter()
        .find(|s| s.codec_type == "video")
        .ok_or(MediaError::NoVideoStream)?;

    let width = stream.width.unwrap_or(0);
    let height = stream.height.unwrap_or(0);

    Orientation::from_dimensions(width, height)
        .ok_or(MediaError::DegenerateDimensions { width, height })
}

/// Inspect `path` and classify the orientation of its first video stream.
pub async fn classify(
    inspector: &dyn StreamInspector,
    path: impl AsRef<Path>,
) -> MediaResult<Orientation> {
    let streams = inspector.inspect(path.as_ref()).await?;
    orientation_of(&streams)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(width: u32, height: u32) -> StreamDescriptor {
        StreamDescriptor {
            codec_type: "video".to_string(),
            width: Some(width),
            height: Some(height),
        }
    }

    fn audio() -> StreamDescriptor {
        StreamDescriptor {
            codec_type: "audio".to_string(),
            width: None,
            height: None,
        }
    }

    #[test]
    fn classifies_first_video_stream() {
        let streams = vec![audio(), video(1920, 1080), video(1080, 1920)];
        assert_eq!(orientation_of(&streams).unwrap(), Orientation::Landscape);
    }

    #[test]
    fn portrait_and_other() {
        assert_eq!(
            orientation_of(&[video(1080, 1920)]).unwrap(),
            Orientation::Portrait
        );
        assert_eq!(
            orientation_of(&[video(640, 480)]).unwrap(),
            Orientation::Other
        );
    }

    #[test]
    fn no_video_stream_is_an_error() {
        let err = orientation_of(&[audio()]).unwrap_err();
        assert!(matches!(err, MediaError::NoVideoStream));
        let err = orientation_of(&[]).unwrap_err();
        assert!(matches!(err, MediaError::NoVideoStream));
    }

    #[test]
    fn zero_height_is_degenerate() {
        let err = orientation_of(&[video(1920, 0)]).unwrap_err();
        assert!(matches!(
            err,
            MediaError::DegenerateDimensions {
                width: 1920,
                height: 0
            }
        ));
    }

    #[test]
    fn missing_dimensions_are_degenerate() {
        let stream = StreamDescriptor {
            codec_type: "video".to_string(),
            width: None,
            height: None,
        };
        let err = orientation_of(&[stream]).unwrap_err();
        assert!(matches!(err, MediaError::DegenerateDimensions { .. }));
    }
}
