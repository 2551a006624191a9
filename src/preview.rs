use image::{imageops, imageops::FilterType, Rgb, RgbImage};

use crate::Raster;

pub const PREVIEW_WIDTH: u32 = 400;
pub const PREVIEW_HEIGHT: u32 = 400;

/// Size that fits `width x height` inside the bounds, keeping aspect ratio.
/// Never upscales.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let scale = (max_width as f32 / width as f32).min(max_height as f32 / height as f32);
    if scale >= 1.0 {
        return (width, height);
    }

    (
        ((width as f32 * scale) as u32).max(1),
        ((height as f32 * scale) as u32).max(1),
    )
}

pub fn scale_for_preview(raster: &Raster) -> RgbImage {
    let img = RgbImage::from(raster);
    let (w, h) = fit_within(img.width(), img.height(), PREVIEW_WIDTH, PREVIEW_HEIGHT);
    if (w, h) == img.dimensions() {
        return img;
    }
    imageops::resize(&img, w, h, FilterType::Lanczos3)
}

/// Original on the left, degraded on the right, both scaled to preview size.
pub fn side_by_side(original: &Raster, degraded: &Raster) -> RgbImage {
    let left = scale_for_preview(original);
    let right = scale_for_preview(degraded);

    let width = left.width() + right.width();
    let height = left.height().max(right.height());
    let mut canvas = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));

    imageops::replace(&mut canvas, &left, 0, 0);
    imageops::replace(&mut canvas, &right, left.width() as i64, 0);
    canvas
}
