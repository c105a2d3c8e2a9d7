use image::{ColorType, DynamicImage, RgbaImage};

/// Coerce any decoded image to the four-channel RGBA representation.
/// Alpha-less sources come out fully opaque.
pub fn ensure_rgba(image: DynamicImage) -> RgbaImage {
    image.into_rgba8()
}

/// True when the decoded representation already carries RGBA pixels.
pub fn is_rgba(color: ColorType) -> bool {
    matches!(color, ColorType::Rgba8)
}

/// True when every pixel is fully opaque (alpha 255), i.e. the alpha channel
/// carries no actual transparency.
pub fn is_fully_opaque(image: &RgbaImage) -> bool {
    image.pixels().all(|p| p.0[3] == 255)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn rgb_source_becomes_opaque_rgba() {
        let rgb = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(4, 4, image::Rgb([9, 8, 7])));
        let rgba = ensure_rgba(rgb);
        assert!(rgba.pixels().all(|p| p.0 == [9, 8, 7, 255]));
    }

    #[test]
    fn grayscale_source_becomes_rgba() {
        let gray = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(2, 2, image::Luma([40])));
        let rgba = ensure_rgba(gray);
        assert!(rgba.pixels().all(|p| p.0 == [40, 40, 40, 255]));
    }

    #[test]
    fn opacity_inspection() {
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 255]));
        assert!(is_fully_opaque(&img));
        img.put_pixel(1, 1, Rgba([1, 2, 3, 254]));
        assert!(!is_fully_opaque(&img));
    }

    #[test]
    fn color_type_classification() {
        assert!(is_rgba(ColorType::Rgba8));
        assert!(!is_rgba(ColorType::Rgb8));
        assert!(!is_rgba(ColorType::La8));
    }
}
