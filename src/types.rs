//! Shared types and enums used across logoprep.
//! Includes the closed `SourceFormat` enumeration, crop and conversion
//! outcomes, and the alpha-verification status.
use std::path::Path;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Closed set of supported source formats, resolved once from the file
/// extension at the collaborator boundary. Anything else is skipped.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum SourceFormat {
    Png,
    Svg,
    Webp,
    Jpeg,
    Gif,
    Bmp,
    Ico,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(SourceFormat::Png),
            "svg" => Some(SourceFormat::Svg),
            "webp" => Some(SourceFormat::Webp),
            "jpg" | "jpeg" => Some(SourceFormat::Jpeg),
            "gif" => Some(SourceFormat::Gif),
            "bmp" => Some(SourceFormat::Bmp),
            "ico" => Some(SourceFormat::Ico),
            _ => None,
        }
    }

    /// Formats the raster codec can decode directly. SVG needs the external
    /// renderer instead.
    pub fn is_raster(self) -> bool {
        !matches!(self, SourceFormat::Svg)
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SourceFormat::Png => "png",
            SourceFormat::Svg => "svg",
            SourceFormat::Webp => "webp",
            SourceFormat::Jpeg => "jpeg",
            SourceFormat::Gif => "gif",
            SourceFormat::Bmp => "bmp",
            SourceFormat::Ico => "ico",
        };
        write!(f, "{}", s)
    }
}

/// Result of cropping an image to its content bounding box.
/// `AlreadyTight` and `NoContent` are successful no-op outcomes, not errors;
/// callers use them to skip re-encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CropOutcome {
    Cropped(RgbaImage),
    AlreadyTight,
    NoContent,
}

/// Result of converting a single file to RGBA PNG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertOutcome {
    /// PNG input that already carried an alpha channel; nothing written.
    AlreadyRgba,
    /// PNG input re-encoded in place with an alpha channel added.
    RewrittenRgba,
    /// Non-PNG raster input converted; the original was backed up and removed.
    Converted { output: std::path::PathBuf },
    /// Vector input; the renderer path handles these.
    SkippedVector,
}

/// Alpha-channel classification of a PNG file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaStatus {
    /// Four-channel image; `fully_opaque` when every pixel has alpha 255.
    Rgba { fully_opaque: bool },
    /// Image without an alpha channel, left as found.
    MissingAlpha,
    /// Image without an alpha channel, re-encoded as RGBA in place.
    Converted,
}
