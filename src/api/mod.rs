//! High-level, ergonomic library API: per-file conversion, cropping, and
//! alpha verification, batch helpers for directories, and the SVG render
//! path. Prefer these entrypoints over the low-level processing modules when
//! integrating logoprep.
use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::alpha::{ensure_rgba, is_fully_opaque, is_rgba};
use crate::core::processing::crop::crop_to_content;
use crate::core::processing::fit::fit_to_dimensions;
use crate::error::{Error, Result};
use crate::io::backup::backup_original;
use crate::io::svg::extract_dimensions;
use crate::io::thumbnailer::{DEFAULT_RENDER_SIZE, Thumbnailer};
use crate::types::{AlphaStatus, ConvertOutcome, CropOutcome, SourceFormat};

/// Batch processing report
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
}

/// Result of cropping a single file on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropFileOutcome {
    Cropped {
        original: (u32, u32),
        cropped: (u32, u32),
    },
    AlreadyTight,
    NoContent,
}

fn list_files_with_format(dir: &Path, format: Option<SourceFormat>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match (SourceFormat::from_path(&path), format) {
            (Some(found), Some(wanted)) if found == wanted => files.push(path),
            (Some(_), None) => files.push(path),
            _ => {}
        }
    }
    files.sort();
    Ok(files)
}

/// Convert a single file to RGBA PNG.
///
/// PNG inputs that already carry an alpha channel are left untouched;
/// alpha-less PNGs are re-encoded in place. Other raster formats are decoded,
/// coerced to RGBA, written as `<stem>.png`, and the original is backed up
/// (when a backup directory is given) and removed. SVG inputs are reported
/// for the renderer path, not decoded here.
pub fn convert_file_to_png(path: &Path, backup_dir: Option<&Path>) -> Result<ConvertOutcome> {
    let format = SourceFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
        path: path.display().to_string(),
    })?;

    match format {
        SourceFormat::Png => {
            let decoded = image::open(path)?;
            if is_rgba(decoded.color()) {
                info!("{:?} already has an alpha channel", path);
                return Ok(ConvertOutcome::AlreadyRgba);
            }
            info!("Adding alpha channel to {:?} (was {:?})", path, decoded.color());
            ensure_rgba(decoded).save_with_format(path, ImageFormat::Png)?;
            Ok(ConvertOutcome::RewrittenRgba)
        }
        SourceFormat::Svg => {
            info!("{:?} is a vector source; use the SVG render path", path);
            Ok(ConvertOutcome::SkippedVector)
        }
        _ => {
            if let Some(backup_dir) = backup_dir {
                backup_original(path, backup_dir)?;
            }
            let decoded = image::open(path)?;
            info!(
                "Converting {:?}: {}x{}, {:?}",
                path,
                decoded.width(),
                decoded.height(),
                decoded.color()
            );
            let output = path.with_extension("png");
            ensure_rgba(decoded).save_with_format(&output, ImageFormat::Png)?;
            fs::remove_file(path)?;
            Ok(ConvertOutcome::Converted { output })
        }
    }
}

/// Convert every supported file in `dir` to RGBA PNG. SVG files and files
/// with unknown extensions count as skipped; per-file failures are logged and
/// counted, and the batch continues.
pub fn convert_directory(dir: &Path, backup_dir: Option<&Path>) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for path in list_files_with_format(dir, None)? {
        match convert_file_to_png(&path, backup_dir) {
            Ok(ConvertOutcome::SkippedVector) => report.skipped += 1,
            Ok(_) => report.processed += 1,
            Err(e) => {
                warn!("Error converting {:?}: {}", path, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

/// Crop a single PNG file to its content bounding box, saving over the
/// original. `AlreadyTight` and `NoContent` leave the file untouched.
pub fn crop_file_to_content(
    path: &Path,
    params: &ProcessingParams,
    backup_dir: Option<&Path>,
) -> Result<CropFileOutcome> {
    let image = ensure_rgba(image::open(path)?);
    let original = image.dimensions();

    match crop_to_content(&image, params) {
        CropOutcome::NoContent => {
            warn!("No content found in {:?}, skipping", path);
            Ok(CropFileOutcome::NoContent)
        }
        CropOutcome::AlreadyTight => {
            info!("{:?} is already tight", path);
            Ok(CropFileOutcome::AlreadyTight)
        }
        CropOutcome::Cropped(cropped) => {
            if let Some(backup_dir) = backup_dir {
                backup_original(path, backup_dir)?;
            }
            let dimensions = cropped.dimensions();
            cropped.save_with_format(path, ImageFormat::Png)?;
            info!(
                "Cropped {:?}: {}x{} -> {}x{}",
                path, original.0, original.1, dimensions.0, dimensions.1
            );
            Ok(CropFileOutcome::Cropped {
                original,
                cropped: dimensions,
            })
        }
    }
}

/// Crop every PNG in `dir` to its content bounding box. Tight and blank
/// images count as skipped.
pub fn crop_directory(
    dir: &Path,
    params: &ProcessingParams,
    backup_dir: Option<&Path>,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for path in list_files_with_format(dir, Some(SourceFormat::Png))? {
        match crop_file_to_content(&path, params, backup_dir) {
            Ok(CropFileOutcome::Cropped { .. }) => report.processed += 1,
            Ok(_) => report.skipped += 1,
            Err(e) => {
                warn!("Error cropping {:?}: {}", path, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

/// Classify a PNG file's alpha channel. With `fix` set, files missing an
/// alpha channel are re-encoded as RGBA in place.
pub fn verify_file_alpha(path: &Path, fix: bool) -> Result<AlphaStatus> {
    let decoded = image::open(path)?;

    if is_rgba(decoded.color()) {
        let fully_opaque = is_fully_opaque(&decoded.into_rgba8());
        return Ok(AlphaStatus::Rgba { fully_opaque });
    }

    if fix {
        ensure_rgba(decoded).save_with_format(path, ImageFormat::Png)?;
        info!("Converted {:?} to RGBA", path);
        Ok(AlphaStatus::Converted)
    } else {
        Ok(AlphaStatus::MissingAlpha)
    }
}

/// Verify the alpha channel of every PNG in `dir`. Files already in RGBA
/// count as processed; files missing alpha count as processed when fixed,
/// skipped otherwise.
pub fn verify_directory_alpha(dir: &Path, fix: bool) -> Result<BatchReport> {
    let mut report = BatchReport::default();

    for path in list_files_with_format(dir, Some(SourceFormat::Png))? {
        match verify_file_alpha(&path, fix) {
            Ok(AlphaStatus::Rgba { fully_opaque }) => {
                info!(
                    "{:?}: RGBA{}",
                    path,
                    if fully_opaque { " (fully opaque)" } else { "" }
                );
                report.processed += 1;
            }
            Ok(AlphaStatus::Converted) => report.processed += 1,
            Ok(AlphaStatus::MissingAlpha) => {
                warn!("{:?} has no alpha channel", path);
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Error verifying {:?}: {}", path, e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

/// Render an SVG source to an RGBA PNG at `output`.
///
/// Natural dimensions come from `target` when given, otherwise from the SVG
/// markup itself. The thumbnailer renders at twice the larger dimension to
/// avoid edge cropping; the bitmap is then aspect-fitted back to the natural
/// dimensions. Returns the final dimensions.
pub fn render_svg_to_png(
    input: &Path,
    output: &Path,
    target: Option<(u32, u32)>,
    thumbnailer: &Thumbnailer,
) -> Result<(u32, u32)> {
    let dimensions = match target {
        Some(dims) => Some(dims),
        None => extract_dimensions(input)?.map(|d| (d.width, d.height)),
    };

    let render_size = dimensions
        .map(|(w, h)| w.max(h).saturating_mul(2))
        .unwrap_or(DEFAULT_RENDER_SIZE);

    let thumb_path = thumbnailer.render(input, render_size)?;
    let rendered = ensure_rgba(image::open(&thumb_path)?);
    info!(
        "Thumbnailer produced {}x{}",
        rendered.width(),
        rendered.height()
    );

    let final_image = match dimensions {
        Some((width, height)) => fit_to_dimensions(&rendered, width, height)?,
        None => rendered,
    };
    final_image.save_with_format(output, ImageFormat::Png)?;

    // The intermediate thumbnail may be the output itself when the caller
    // asked for the tool's naming convention; only remove a distinct file.
    if thumb_path != output {
        fs::remove_file(&thumb_path)?;
    }

    info!(
        "Rendered {:?} -> {:?} ({}x{})",
        input,
        output,
        final_image.width(),
        final_image.height()
    );
    Ok((final_image.width(), final_image.height()))
}
