//! Image variants produced for every uploaded listing photo.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Size variant of a stored listing image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageVariant {
    /// The upload as received, re-encoded as JPEG.
    Original,
    /// Search-result thumbnail (400x300).
    Thumbnail,
    /// Listing card (800x600).
    Card,
    /// Full-width detail page banner (1920x1080).
    Hero,
}

impl ImageVariant {
    /// Every variant, in the order the resize step writes them.
    pub const ALL: [ImageVariant; 4] = [
        ImageVariant::Original,
        ImageVariant::Thumbnail,
        ImageVariant::Card,
        ImageVariant::Hero,
    ];

    /// Name used in the stored file suffix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Thumbnail => "thumbnail",
            Self::Card => "card",
            Self::Hero => "hero",
        }
    }

    /// File extension (without dot). Originals are JPEG, derived variants WebP.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Original => "jpg",
            Self::Thumbnail | Self::Card | Self::Hero => "webp",
        }
    }

    /// Target pixel geometry as `(width, height)`, or `None` for the original.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Self::Original => None,
            Self::Thumbnail => Some((400, 300)),
            Self::Card => Some((800, 600)),
            Self::Hero => Some((1920, 1080)),
        }
    }

    /// Match a variant name, ignoring ASCII case.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ImageVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim()).ok_or_else(|| Error::UnknownVariant(s.to_string()))
    }
}
