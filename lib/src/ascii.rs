use crate::border::{BorderStyle, draw_border};
use crate::error::{AsciiError, Result};
use crate::lut::Palette;
use image::{GrayImage, RgbImage};
use rayon::prelude::*;
use std::fmt;

/// Resets all terminal attributes
pub const RESET: &str = "\x1b[0m";

/// One output character, optionally carrying a 24-bit foreground color
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub color: Option<[u8; 3]>,
}

impl Glyph {
    pub fn plain(ch: char) -> Self {
        Self { ch, color: None }
    }

    pub fn colored(ch: char, rgb: [u8; 3]) -> Self {
        Self {
            ch,
            color: Some(rgb),
        }
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some([r, g, b]) = self.color {
            write!(f, "\x1b[38;2;{r};{g};{b}m")?;
        }
        write!(f, "{}", self.ch)
    }
}

/// Select one glyph per grayscale pixel, in row-major order
///
/// # Arguments
/// * `gray` - Preprocessed grayscale image, one pixel per output cell
/// * `palette` - Palette already oriented for inversion
pub fn select_glyphs(gray: &GrayImage, palette: &Palette) -> Vec<Glyph> {
    gray.as_raw()
        .par_iter()
        .map(|&v| Glyph::plain(palette.glyph_for(v as f32)))
        .collect()
}

/// Select one colored glyph per RGB pixel, in row-major order
///
/// The glyph is chosen from the unweighted mean of R, G and B, and carries
/// the pixel's own color.
pub fn select_colored_glyphs(rgb: &RgbImage, palette: &Palette) -> Vec<Glyph> {
    rgb.as_raw()
        .par_chunks_exact(3)
        .map(|px| {
            let [r, g, b] = [px[0], px[1], px[2]];
            Glyph::colored(palette.glyph_for(mean_brightness(r, g, b)), [r, g, b])
        })
        .collect()
}

/// Unweighted channel mean
pub fn mean_brightness(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 + g as f32 + b as f32) / 3.0
}

/// Split glyphs into lines of `width` glyphs
///
/// The last line is shorter when the glyph count is not a multiple of
/// `width`. Colored lines end with a reset so color does not bleed into
/// whatever the terminal prints next.
pub fn layout_lines(glyphs: &[Glyph], width: usize, colored: bool) -> Result<Vec<String>> {
    if width == 0 {
        return Err(AsciiError::InvalidConfig("line width must be at least 1".to_string()));
    }

    Ok(glyphs
        .chunks(width)
        .map(|row| {
            let mut line: String = row.iter().map(|g| g.to_string()).collect();
            if colored {
                line.push_str(RESET);
            }
            line
        })
        .collect())
}

/// Centered window of at most `max_lines` lines
///
/// Blocks that already fit are returned whole.
pub fn preview_window(lines: &[String], max_lines: usize) -> &[String] {
    let total = lines.len();
    if total <= max_lines {
        return lines;
    }

    let center = total / 2;
    let start = center.saturating_sub(max_lines / 2).min(total - max_lines);
    &lines[start..start + max_lines]
}

/// Rendered block of text lines
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiArt {
    pub lines: Vec<String>,
    /// Lines contain true-color escapes
    pub colored: bool,
}

impl AsciiArt {
    pub fn from_glyphs(glyphs: &[Glyph], width: usize, colored: bool) -> Result<Self> {
        Ok(Self {
            lines: layout_lines(glyphs, width, colored)?,
            colored,
        })
    }

    pub fn preview(&self, max_lines: usize) -> &[String] {
        preview_window(&self.lines, max_lines)
    }

    pub fn with_border(&self, style: BorderStyle) -> Self {
        Self {
            lines: draw_border(&self.lines, style),
            colored: self.colored,
        }
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}
