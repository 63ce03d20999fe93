use image::{GrayImage, Luma, RgbaImage};

use crate::board::Point;

/// Crops a `size`x`size` square centered on `center`.
///
/// The square is clamped to the image bounds, so crops near an edge come
/// back smaller (and empty when the center lies entirely outside).
pub fn crop_around(img: &RgbaImage, center: Point, size: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let half = size as f64 / 2.0;

    let x0 = (center.x - half).max(0.0).min(w as f64) as u32;
    let y0 = (center.y - half).max(0.0).min(h as f64) as u32;
    let x1 = (center.x + half).max(0.0).min(w as f64) as u32;
    let y1 = (center.y + half).max(0.0).min(h as f64) as u32;

    image::imageops::crop_imm(img, x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0)).to_image()
}

/// Converts to grayscale with luma weights, then stretches contrast
/// around mid-gray by `factor`.
///
/// Number tokens are dark digits on a light disc; pushing both ends apart
/// makes Tesseract far less likely to read the disc edge as a digit.
pub fn enhance_for_ocr(img: &RgbaImage, factor: f32) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        let gray = 0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32;
        output.put_pixel(x, y, Luma([increase_contrast(gray, factor)]));
    }

    output
}

fn increase_contrast(value: f32, factor: f32) -> u8 {
    let normalized = value / 255.0;
    let contrasted = (normalized - 0.5) * factor + 0.5;
    (contrasted * 255.0).round().clamp(0.0, 255.0) as u8
}
