/// Color format normalization
///
/// Everything stored in the collection is plain 8-bit RGB so it can be
/// written as JPEG (no alpha channel) without per-export conversion.
/// Transparent sources are composited onto white:
///
/// `out = (c * a + 255 * (255 - a)) / 255`, rounded to nearest.

use image::{DynamicImage, Rgb, RgbImage};

/// Background used for transparent pixels
pub const FLATTEN_BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Convert any decoded image to opaque RGB8
///
/// Images with an alpha channel (including palette images, which decode
/// to RGBA) are flattened onto `FLATTEN_BACKGROUND`; everything else is a
/// plain format conversion.
pub fn flatten_to_rgb(image: DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return match image {
            DynamicImage::ImageRgb8(rgb) => rgb,
            other => other.to_rgb8(),
        };
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut out = RgbImage::from_pixel(width, height, FLATTEN_BACKGROUND);

    for (src, dst) in rgba.pixels().zip(out.pixels_mut()) {
        let alpha = src[3] as u32;
        for channel in 0..3 {
            dst[channel] = blend_channel(src[channel], FLATTEN_BACKGROUND[channel], alpha);
        }
    }

    out
}

/// Source-over blend of one channel with integer rounding
fn blend_channel(src: u8, background: u8, alpha: u32) -> u8 {
    let mixed = src as u32 * alpha + background as u32 * (255 - alpha);
    ((mixed + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn test_opaque_rgb_passes_through() {
        let rgb = RgbImage::from_pixel(3, 2, Rgb([10, 20, 30]));
        let flat = flatten_to_rgb(DynamicImage::ImageRgb8(rgb.clone()));
        assert_eq!(flat, rgb);
    }

    #[test]
    fn test_partial_transparency_composites_over_white() {
        let mut rgba = RgbaImage::new(3, 1);
        rgba.put_pixel(0, 0, Rgba([200, 100, 0, 255])); // opaque
        rgba.put_pixel(1, 0, Rgba([200, 100, 0, 0])); // fully transparent
        rgba.put_pixel(2, 0, Rgba([0, 0, 0, 128])); // half black

        let flat = flatten_to_rgb(DynamicImage::ImageRgba8(rgba));

        assert_eq!(flat.dimensions(), (3, 1));
        assert_eq!(*flat.get_pixel(0, 0), Rgb([200, 100, 0]));
        assert_eq!(*flat.get_pixel(1, 0), Rgb([255, 255, 255]));
        // 255 * 127 / 255 = 127
        assert_eq!(*flat.get_pixel(2, 0), Rgb([127, 127, 127]));
    }

    #[test]
    fn test_grayscale_becomes_rgb() {
        let gray = GrayImage::from_pixel(2, 2, Luma([77]));
        let flat = flatten_to_rgb(DynamicImage::ImageLuma8(gray));
        assert_eq!(*flat.get_pixel(1, 1), Rgb([77, 77, 77]));
    }

    #[test]
    fn test_blend_channel_extremes() {
        assert_eq!(blend_channel(0, 255, 0), 255);
        assert_eq!(blend_channel(0, 255, 255), 0);
        assert_eq!(blend_channel(255, 255, 17), 255);
    }
}
