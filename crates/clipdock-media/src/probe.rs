//! FFprobe stream metadata.

use serde::Deserialize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::error::{MediaError, MediaResult};

/// A single stream reported by the probe tool.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamDescriptor {
    /// Codec type tag ("video", "audio", ...)
    pub codec_type: String,
    /// Width in pixels (video streams only)
    pub width: Option<u32>,
    /// Height in pixels (video streams only)
    pub height: Option<u32>,
}

/// FFprobe JSON output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<StreamDescriptor>,
}

/// Probe a local file for its stream descriptors.
///
/// Runs `ffprobe` requesting JSON stream metadata on stdout. A spawn failure
/// or non-zero exit is reported as [`MediaError::FfprobeFailed`]; stderr is
/// not inspected.
pub async fn probe_streams(path: impl AsRef<Path>) -> MediaResult<Vec<StreamDescriptor>> {
    let path = path.as_ref();

    which::which("ffprobe").map_err(|_| MediaError::FfprobeNotFound)?;

    let output = Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_streams"])
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .await?;

    if !output.status.success() {
        return Err(MediaError::ffprobe_failed(
            format!("ffprobe exited with {}", output.status),
            output.status.code(),
        ));
    }

    let streams = parse_probe_output(&output.stdout)?;
    debug!(path = %path.display(), streams = streams.len(), "Probed file");
    Ok(streams)
}

/// Parse captured ffprobe stdout into stream descriptors.
pub(crate) fn parse_probe_output(stdout: &[u8]) -> MediaResult<Vec<StreamDescriptor>> {
    let probe: FfprobeOutput = serde_json::from_slice(stdout)?;
    Ok(probe.streams)
}
