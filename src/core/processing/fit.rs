use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::{RgbaImage, imageops};
use tracing::info;

use crate::error::{Error, Result};

/// Aspect ratios closer than this are treated as equal and resized directly
/// without padding.
pub const RATIO_TOLERANCE: f64 = 0.01;

/// Compute the intermediate size that preserves the source aspect ratio while
/// fitting inside the target box. The constraining axis matches the target
/// exactly; the other axis is rounded and never exceeds the target.
pub fn calculate_fit_dimensions(
    source_width: u32,
    source_height: u32,
    target_width: u32,
    target_height: u32,
) -> (u32, u32) {
    let source_ratio = source_width as f64 / source_height as f64;
    let target_ratio = target_width as f64 / target_height as f64;

    if source_ratio > target_ratio {
        // Source relatively wider: width is the constraining axis
        let fitted_height = (target_width as f64 / source_ratio).round() as u32;
        (target_width, fitted_height.clamp(1, target_height))
    } else {
        // Source relatively taller or equal: height constrains
        let fitted_width = (target_height as f64 * source_ratio).round() as u32;
        (fitted_width.clamp(1, target_width), target_height)
    }
}

/// Lanczos3 resize of an RGBA buffer to exact target dimensions.
pub fn resize_rgba_image(image: &RgbaImage, target_width: u32, target_height: u32) -> Result<RgbaImage> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        image.width(),
        image.height(),
        image.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::external)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| Error::Processing("resized buffer has unexpected length".to_string()))
}

/// Produce an image of exactly `(target_width, target_height)` from the
/// source, preserving its aspect ratio.
///
/// When the source and target ratios match within [`RATIO_TOLERANCE`] the
/// source is resized directly. Otherwise it is resized to the fitted
/// intermediate size and composited centered onto a fully transparent canvas
/// of the target size, using the source's own alpha as the blend mask so any
/// partial transparency survives.
pub fn fit_to_dimensions(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
) -> Result<RgbaImage> {
    if target_width == 0 {
        return Err(Error::InvalidArgument {
            arg: "target_width",
            value: target_width.to_string(),
        });
    }
    if target_height == 0 {
        return Err(Error::InvalidArgument {
            arg: "target_height",
            value: target_height.to_string(),
        });
    }

    let (source_width, source_height) = image.dimensions();
    let source_ratio = source_width as f64 / source_height as f64;
    let target_ratio = target_width as f64 / target_height as f64;

    if (source_ratio - target_ratio).abs() <= RATIO_TOLERANCE {
        return resize_rgba_image(image, target_width, target_height);
    }

    let (fitted_width, fitted_height) =
        calculate_fit_dimensions(source_width, source_height, target_width, target_height);

    info!(
        "Fitting {}x{} into {}x{} via intermediate {}x{}",
        source_width, source_height, target_width, target_height, fitted_width, fitted_height
    );

    let resized = resize_rgba_image(image, fitted_width, fitted_height)?;

    // Fresh canvas is zero-initialized, i.e. fully transparent (0,0,0,0)
    let mut canvas = RgbaImage::new(target_width, target_height);
    let x_offset = (target_width as i64 - fitted_width as i64) / 2;
    let y_offset = (target_height as i64 - fitted_height as i64) / 2;
    imageops::overlay(&mut canvas, &resized, x_offset, y_offset);

    Ok(canvas)
}
