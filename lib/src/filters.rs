use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::filter::gaussian_blur_f32;

/// Convert an RGB image to 8-bit grayscale
///
/// Formula: L = 0.299*R + 0.587*G + 0.114*B (ITU-R 601-2 luma)
///
/// # Arguments
/// * `img` - Input RGB image
///
/// # Returns
/// Grayscale image with luma values
pub fn to_grayscale(img: &RgbImage) -> GrayImage {
    let (width, height) = img.dimensions();
    let mut output = GrayImage::new(width, height);

    for (x, y, pixel) in img.enumerate_pixels() {
        output.put_pixel(x, y, Luma([luma(pixel)]));
    }

    output
}

fn luma(pixel: &Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0;
    let l = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    l.round().clamp(0.0, 255.0) as u8
}

/// Interpolate every channel between a degenerate value and the original
///
/// `out = base + factor * (value - base)`, clipped to [0, 255].
fn blend_toward(img: &RgbImage, base: f32, factor: f32) -> RgbImage {
    let mut output = img.clone();
    for channel in output.iter_mut() {
        let blended = base + factor * (*channel as f32 - base);
        *channel = blended.clamp(0.0, 255.0) as u8;
    }
    output
}

/// Scale brightness by `factor`
///
/// 1.0 returns the image unchanged, 0.0 produces a black image and values
/// above 1.0 brighten.
pub fn adjust_brightness(img: &RgbImage, factor: f32) -> RgbImage {
    if factor == 1.0 {
        return img.clone();
    }
    blend_toward(img, 0.0, factor)
}

/// Scale contrast around the mean gray level by `factor`
///
/// 1.0 returns the image unchanged, 0.0 produces a flat image filled with
/// the mean gray level and values above 1.0 push pixels away from it.
pub fn adjust_contrast(img: &RgbImage, factor: f32) -> RgbImage {
    if factor == 1.0 {
        return img.clone();
    }
    blend_toward(img, mean_gray(img), factor)
}

/// Mean grayscale level rounded to the nearest integer
pub fn mean_gray(img: &RgbImage) -> f32 {
    let count = img.width() as u64 * img.height() as u64;
    if count == 0 {
        return 0.0;
    }
    let sum: u64 = img.pixels().map(|p| luma(p) as u64).sum();
    (sum as f64 / count as f64).round() as f32
}

/// Apply a Gaussian blur whose standard deviation equals `radius`
///
/// A radius of zero or less returns the image unchanged.
pub fn apply_blur(img: &RgbImage, radius: f32) -> RgbImage {
    if radius <= 0.0 {
        return img.clone();
    }
    gaussian_blur_f32(img, radius)
}
