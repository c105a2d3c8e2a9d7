use image::RgbaImage;

/// Axis-aligned content bounding box with exclusive right/bottom edges.
/// Invariant: `0 <= left < right <= width` and `0 <= top < bottom <= height`
/// of the image it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// True when the box covers the entire image extent
    pub fn is_full(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

/// A pixel counts as content when its alpha exceeds the threshold AND it is
/// not near-white. The second clause makes the same rule work for images that
/// are alpha-opaque but logically drawn on a white canvas.
#[inline]
fn is_content_pixel(r: u8, g: u8, b: u8, a: u8, alpha_threshold: u8) -> bool {
    a > alpha_threshold && !(r > 250 && g > 250 && b > 250)
}

/// Find the smallest rectangle enclosing all content pixels, expanded by a
/// per-axis padding of `max(2, round(padding_fraction * dimension))` pixels
/// and clamped to the image bounds.
///
/// Returns `None` when every pixel classifies as background; the caller must
/// skip cropping in that case. This is a pure O(width * height) scan with
/// four accumulators and no allocation.
pub fn find_content_bbox(
    image: &RgbaImage,
    alpha_threshold: u8,
    padding_fraction: f64,
) -> Option<BoundingBox> {
    let (width, height) = image.dimensions();

    let mut min_x = width;
    let mut min_y = height;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if is_content_pixel(r, g, b, a, alpha_threshold) {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    if !found {
        return None;
    }

    let pad_x = ((width as f64 * padding_fraction).round() as u32).max(2);
    let pad_y = ((height as f64 * padding_fraction).round() as u32).max(2);

    Some(BoundingBox {
        left: min_x.saturating_sub(pad_x),
        top: min_y.saturating_sub(pad_y),
        right: (max_x + 1).saturating_add(pad_x).min(width),
        bottom: (max_y + 1).saturating_add(pad_y).min(height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn transparent_image(width: u32, height: u32) -> RgbaImage {
        RgbaImage::new(width, height)
    }

    #[test]
    fn fully_transparent_image_has_no_content() {
        let img = transparent_image(32, 16);
        assert_eq!(find_content_bbox(&img, 5, 0.01), None);
    }

    #[test]
    fn near_white_opaque_image_has_no_content() {
        let mut img = transparent_image(8, 8);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([252, 253, 255, 255]);
        }
        assert_eq!(find_content_bbox(&img, 5, 0.01), None);
    }

    #[test]
    fn opaque_white_with_dark_pixel_finds_the_pixel() {
        let mut img = transparent_image(20, 20);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([255, 255, 255, 255]);
        }
        img.put_pixel(7, 9, Rgba([10, 10, 10, 255]));
        let bbox = find_content_bbox(&img, 5, 0.01).unwrap();
        assert!(bbox.left <= 7 && 7 < bbox.right);
        assert!(bbox.top <= 9 && 9 < bbox.bottom);
    }

    #[test]
    fn reference_scenario_100x50_red_with_border() {
        // 100x50, opaque red content spanning (10,10) to (90,40) exclusive,
        // 10px transparent border all around. Padding resolves to 2px per
        // axis, giving (8,8,92,42).
        let mut img = transparent_image(100, 50);
        for y in 10..40 {
            for x in 10..90 {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        let bbox = find_content_bbox(&img, 5, 0.01).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                left: 8,
                top: 8,
                right: 92,
                bottom: 42
            }
        );
    }

    #[test]
    fn single_pixel_image_clamps_without_inverting() {
        let mut img = transparent_image(1, 1);
        img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        let bbox = find_content_bbox(&img, 5, 0.01).unwrap();
        assert_eq!(
            bbox,
            BoundingBox {
                left: 0,
                top: 0,
                right: 1,
                bottom: 1
            }
        );
        assert_eq!(bbox.width(), 1);
        assert_eq!(bbox.height(), 1);
    }

    #[test]
    fn alpha_at_threshold_is_background() {
        let mut img = transparent_image(4, 4);
        img.put_pixel(1, 1, Rgba([0, 0, 0, 5]));
        assert_eq!(find_content_bbox(&img, 5, 0.01), None);
        img.put_pixel(1, 1, Rgba([0, 0, 0, 6]));
        assert!(find_content_bbox(&img, 5, 0.01).is_some());
    }

    #[test]
    fn padding_scales_with_dimension() {
        // 400px wide: round(400 * 0.01) = 4 > minimum 2
        let mut img = transparent_image(400, 400);
        img.put_pixel(200, 200, Rgba([0, 0, 0, 255]));
        let bbox = find_content_bbox(&img, 5, 0.01).unwrap();
        assert_eq!(bbox.left, 196);
        assert_eq!(bbox.right, 205);
        assert_eq!(bbox.top, 196);
        assert_eq!(bbox.bottom, 205);
    }
}
