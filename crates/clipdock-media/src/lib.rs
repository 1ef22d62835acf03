//! FFprobe stream inspection and upload staging.
//!
//! This crate provides:
//! - Subprocess-backed stream inspection via `ffprobe`
//! - Orientation classification from probed stream dimensions
//! - Bounded temp-file staging for uploaded payloads with guaranteed cleanup

pub mod error;
pub mod inspect;
pub mod probe;
pub mod stage;

pub use error::{MediaError, MediaResult};
pub use inspect::{classify, orientation_of, FfprobeInspector, StreamInspector};
pub use probe::{probe_streams, StreamDescriptor};
pub use stage::StagedUpload;
