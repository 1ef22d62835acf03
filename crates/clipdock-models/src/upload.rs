//! Upload kinds and declared content-type validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Declared content type was not in the accepted set for the asset kind.
#[derive(Debug, Clone, Error)]
#[error("unsupported media type for {kind}: {content_type}")]
pub struct UnsupportedMediaType {
    pub kind: AssetKind,
    pub content_type: String,
}

/// Kind of media asset an upload endpoint accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Thumbnail,
    Video,
}

impl AssetKind {
    /// Multipart field name carrying the payload.
    pub fn field_name(&self) -> &'static str {
        match self {
            AssetKind::Thumbnail => "thumbnail",
            AssetKind::Video => "video",
        }
    }

    /// Validate a declared content type against the accepted set and derive
    /// the file extension used in storage keys.
    ///
    /// Media-type parameters (`; charset=...`) are stripped before matching.
    /// Accepted: `image/jpeg`, `image/png` for thumbnails; `video/mp4` for
    /// video.
    pub fn validate_content_type(
        &self,
        content_type: &str,
    ) -> Result<&'static str, UnsupportedMediaType> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        let ext = match (self, essence.as_str()) {
            (AssetKind::Thumbnail, "image/jpeg") => "jpeg",
            (AssetKind::Thumbnail, "image/png") => "png",
            (AssetKind::Video, "video/mp4") => "mp4",
            _ => {
                return Err(UnsupportedMediaType {
                    kind: *self,
                    content_type: content_type.to_string(),
                })
            }
        };
        Ok(ext)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_thumbnail_types() {
        let kind = AssetKind::Thumbnail;
        assert_eq!(kind.validate_content_type("image/jpeg").unwrap(), "jpeg");
        assert_eq!(kind.validate_content_type("image/png").unwrap(), "png");
        assert_eq!(kind.validate_content_type("IMAGE/PNG").unwrap(), "png");
    }

    #[test]
    fn strips_media_type_parameters() {
        assert_eq!(
            AssetKind::Thumbnail
                .validate_content_type("image/jpeg; charset=binary")
                .unwrap(),
            "jpeg"
        );
        assert_eq!(
            AssetKind::Video
                .validate_content_type("video/mp4;codecs=avc1")
                .unwrap(),
            "mp4"
        );
    }

    #[test]
    fn rejects_unsupported_types() {
        assert!(AssetKind::Thumbnail.validate_content_type("image/gif").is_err());
        assert!(AssetKind::Thumbnail.validate_content_type("video/mp4").is_err());
        assert!(AssetKind::Video.validate_content_type("video/webm").is_err());
        assert!(AssetKind::Video.validate_content_type("image/png").is_err());
        assert!(AssetKind::Video.validate_content_type("").is_err());
    }

    #[test]
    fn field_names_match_endpoints() {
        assert_eq!(AssetKind::Thumbnail.field_name(), "thumbnail");
        assert_eq!(AssetKind::Video.field_name(), "video");
    }
}
