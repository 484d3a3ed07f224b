use crate::ascii::{AsciiArt, select_colored_glyphs, select_glyphs};
use crate::config::AsciiConfig;
use crate::error::Result;
use crate::filters::{adjust_brightness, adjust_contrast, apply_blur, to_grayscale};
use image::{DynamicImage, RgbImage, imageops};
use log::{debug, warn};

/// Height-to-width ratio of a monospace character cell
pub const CHAR_ASPECT: f64 = 1.65;

/// Rows needed to keep the source aspect ratio at `width` columns
///
/// Formula: round(width * height / width_px / 1.65), at least 1
pub fn derive_height(src_width: u32, src_height: u32, width: u32) -> u32 {
    if src_width == 0 {
        return 1;
    }
    let rows = width as f64 * src_height as f64 / src_width as f64 / CHAR_ASPECT;
    (rows.round() as u32).max(1)
}

/// Resize an image so that one pixel maps to one character cell
///
/// # Arguments
/// * `input` - Source image
/// * `width` - Target columns
/// * `height` - Target rows, derived from the aspect ratio when `None`
///
/// # Returns
/// RGB image of exactly `width × height` pixels
pub fn resize_to_grid(input: &DynamicImage, width: u32, height: Option<u32>) -> RgbImage {
    let height = height.unwrap_or_else(|| derive_height(input.width(), input.height(), width));
    debug!(
        "resizing {}x{} to {}x{} cells",
        input.width(),
        input.height(),
        width,
        height
    );

    imageops::resize(
        &input.to_rgb8(),
        width,
        height,
        imageops::FilterType::Lanczos3,
    )
}

/// Resize and adjust an image ahead of glyph selection
///
/// Brightness is applied before contrast, then the optional blur.
pub fn preprocess(input: &DynamicImage, config: &AsciiConfig) -> RgbImage {
    let mut img = resize_to_grid(input, config.width, config.height);

    if config.brightness != 1.0 {
        debug!("brightness factor {}", config.brightness);
        img = adjust_brightness(&img, config.brightness);
    }
    if config.contrast != 1.0 {
        debug!("contrast factor {}", config.contrast);
        img = adjust_contrast(&img, config.contrast);
    }
    if config.blur > 0.0 {
        debug!("blur radius {}", config.blur);
        img = apply_blur(&img, config.blur);
    }

    img
}

/// Converts an image to ASCII art
///
/// This runs the whole pipeline:
/// 1. Resize to the character grid
/// 2. Brightness, contrast and blur adjustments
/// 3. Glyph selection (grayscale, or RGB when color is enabled)
/// 4. Line layout
/// 5. Optional border
///
/// # Arguments
/// * `input` - The source image
/// * `config` - Conversion settings
/// * `color_supported` - Queried only when color output is requested; when it
///   returns false the conversion falls back to grayscale with a warning
pub fn process_image<F>(
    input: &DynamicImage,
    config: &AsciiConfig,
    color_supported: F,
) -> Result<AsciiArt>
where
    F: FnOnce() -> bool,
{
    config.validate()?;

    let colored = if config.color && !color_supported() {
        warn!("Terminal does not support ANSI colors, falling back to grayscale");
        false
    } else {
        config.color
    };

    let img = preprocess(input, config);
    let palette = config.charset.palette().oriented(config.invert);

    let glyphs = if colored {
        select_colored_glyphs(&img, &palette)
    } else {
        select_glyphs(&to_grayscale(&img), &palette)
    };

    let art = AsciiArt::from_glyphs(&glyphs, img.width() as usize, colored)?;
    debug!("rendered {} lines", art.lines.len());

    Ok(match config.border {
        Some(style) => art.with_border(style),
        None => art,
    })
}
