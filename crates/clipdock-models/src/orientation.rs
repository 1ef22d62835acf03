//! Video orientation classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tolerance absorbing integer rounding in encoded dimensions
/// (e.g. 1920x1080 vs. slightly cropped variants).
const ASPECT_TOLERANCE: f64 = 0.01;

/// Coarse orientation class of a video, derived from stream dimensions.
///
/// Doubles as the storage key prefix for video objects, so the names are
/// part of the public URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Within tolerance of 16:9
    Landscape,
    /// Within tolerance of 9:16
    Portrait,
    /// Anything else, including undetermined
    #[default]
    Other,
}

impl Orientation {
    /// Classify from pixel dimensions. Rules are checked in order; first
    /// match wins. Returns `None` when `height` is zero, since the ratio is
    /// undefined.
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        if height == 0 {
            return None;
        }
        let ratio = width as f64 / height as f64;
        if (ratio - 16.0 / 9.0).abs() <= ASPECT_TOLERANCE {
            Some(Self::Landscape)
        } else if (ratio - 9.0 / 16.0).abs() <= ASPECT_TOLERANCE {
            Some(Self::Portrait)
        } else {
            Some(Self::Other)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Other => "other",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_exact_ratios() {
        assert_eq!(
            Orientation::from_dimensions(1920, 1080),
            Some(Orientation::Landscape)
        );
        assert_eq!(
            Orientation::from_dimensions(1080, 1920),
            Some(Orientation::Portrait)
        );
        assert_eq!(
            Orientation::from_dimensions(1440, 1080),
            Some(Orientation::Other)
        );
        assert_eq!(
            Orientation::from_dimensions(1000, 1000),
            Some(Orientation::Other)
        );
    }

    #[test]
    fn tolerance_absorbs_rounded_dimensions() {
        // 1366x768 is ~1.7786, inside the 0.01 window around 16/9.
        assert_eq!(
            Orientation::from_dimensions(1366, 768),
            Some(Orientation::Landscape)
        );
        // 854x480 is ~1.7792.
        assert_eq!(
            Orientation::from_dimensions(854, 480),
            Some(Orientation::Landscape)
        );
        // 608x1080 is ~0.5630, inside the window around 9/16.
        assert_eq!(
            Orientation::from_dimensions(608, 1080),
            Some(Orientation::Portrait)
        );
    }

    #[test]
    fn outside_tolerance_is_other() {
        // 16/9 + ~0.022
        assert_eq!(
            Orientation::from_dimensions(1800, 1000),
            Some(Orientation::Other)
        );
        // 4:3
        assert_eq!(
            Orientation::from_dimensions(640, 480),
            Some(Orientation::Other)
        );
    }

    #[test]
    fn zero_height_is_undefined() {
        assert_eq!(Orientation::from_dimensions(1920, 0), None);
    }

    #[test]
    fn names_match_key_prefixes() {
        assert_eq!(Orientation::Landscape.as_str(), "landscape");
        assert_eq!(Orientation::Portrait.as_str(), "portrait");
        assert_eq!(Orientation::Other.as_str(), "other");
        assert_eq!(Orientation::default(), Orientation::Other);
    }
}
