use image::imageops;
use image::RgbaImage;
use tracing::info;

use crate::core::params::ProcessingParams;
use crate::core::processing::bbox::find_content_bbox;
use crate::types::CropOutcome;

/// Crop an image to its padded content bounding box.
///
/// Delegates to [`find_content_bbox`]; an entirely blank image yields
/// [`CropOutcome::NoContent`], a box covering the full extent yields
/// [`CropOutcome::AlreadyTight`]. Both let callers skip re-encoding. The
/// cropped buffer is independent of the source.
pub fn crop_to_content(image: &RgbaImage, params: &ProcessingParams) -> CropOutcome {
    let (width, height) = image.dimensions();

    let Some(bbox) = find_content_bbox(image, params.alpha_threshold, params.padding_fraction)
    else {
        return CropOutcome::NoContent;
    };

    if bbox.is_full(width, height) {
        return CropOutcome::AlreadyTight;
    }

    info!(
        "Content bounds: ({}, {}) to ({}, {}), new size {}x{}",
        bbox.left,
        bbox.top,
        bbox.right,
        bbox.bottom,
        bbox.width(),
        bbox.height()
    );

    let cropped =
        imageops::crop_imm(image, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image();
    CropOutcome::Cropped(cropped)
}
