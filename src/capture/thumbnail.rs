use iced::widget::image::Handle;
use image::{imageops, imageops::FilterType, DynamicImage, Rgb, RgbImage};

/// Fill color behind thumbnails that don't cover their whole square
pub const THUMBNAIL_BACKGROUND: Rgb<u8> = Rgb([35, 35, 35]);

/// Build a square thumbnail of side `size`.
///
/// The source is downscaled (never upscaled) to fit the box while keeping
/// its aspect ratio, then centered on a `THUMBNAIL_BACKGROUND` square so
/// every grid cell has the same footprint.
pub fn make_thumbnail(image: &RgbImage, size: u32) -> RgbImage {
    let size = size.max(1);
    let (width, height) = image.dimensions();

    let scaled = if width > size || height > size {
        let ratio = (size as f64 / width as f64).min(size as f64 / height as f64);
        let new_width = ((width as f64 * ratio).round() as u32).clamp(1, size);
        let new_height = ((height as f64 * ratio).round() as u32).clamp(1, size);
        imageops::resize(image, new_width, new_height, FilterType::Lanczos3)
    } else {
        image.clone()
    };

    let mut canvas = RgbImage::from_pixel(size, size, THUMBNAIL_BACKGROUND);
    let x = (size - scaled.width()) / 2;
    let y = (size - scaled.height()) / 2;
    imageops::overlay(&mut canvas, &scaled, x as i64, y as i64);

    canvas
}

/// Thumbnail ready for an iced image widget
pub fn thumbnail_handle(image: &RgbImage, size: u32) -> Handle {
    let thumb = make_thumbnail(image, size);
    let (width, height) = thumb.dimensions();
    let rgba = DynamicImage::ImageRgb8(thumb).to_rgba8();
    Handle::from_rgba(width, height, rgba.into_raw())
}
