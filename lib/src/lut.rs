//! Glyph palettes and intensity lookup
//!
//! Every palette is ordered from the darkest (densest) glyph to the lightest.
//! A palette of length N splits the 0-255 intensity range into N buckets of
//! width `256 / N`.

use crate::error::{AsciiError, Result};

/// Ten-step ramp
pub const DEFAULT_CHARS: &str = "@%#*+=-:. ";

/// Six-step ramp for low-detail output
pub const SIMPLE_CHARS: &str = "@#+-. ";

/// Paul Bourke's 70-step ramp
pub const COMPLEX_CHARS: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// Named glyph set
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Charset {
    #[default]
    Default,
    Simple,
    Complex,
}

impl Charset {
    /// Characters of this set, darkest first
    pub fn chars(self) -> &'static str {
        match self {
            Charset::Default => DEFAULT_CHARS,
            Charset::Simple => SIMPLE_CHARS,
            Charset::Complex => COMPLEX_CHARS,
        }
    }

    pub fn palette(self) -> Palette {
        Palette {
            chars: self.chars().chars().collect(),
        }
    }
}

/// Ordered, non-empty sequence of glyphs used for quantization
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    chars: Vec<char>,
}

impl Palette {
    pub fn new(chars: &str) -> Result<Self> {
        let chars: Vec<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(AsciiError::EmptyPalette);
        }
        Ok(Self { chars })
    }

    /// Same glyphs, lightest first
    pub fn reversed(&self) -> Self {
        Self {
            chars: self.chars.iter().rev().copied().collect(),
        }
    }

    /// Palette as used for rendering, reversed when `invert` is set
    pub fn oriented(&self, invert: bool) -> Self {
        if invert { self.reversed() } else { self.clone() }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Glyph for an intensity in [0, 255]
    pub fn glyph_for(&self, value: f32) -> char {
        self.chars[glyph_index(value, self.chars.len())]
    }
}

/// Bucket index for an intensity value
///
/// Index is `floor(value / (256 / len))`, clamped into `0..len` so that
/// rounding at the top of the range never runs past the last glyph.
pub fn glyph_index(value: f32, len: usize) -> usize {
    debug_assert!(len > 0, "palette length must be non-zero");

    let bucket_width = 256.0 / len as f32;
    let index = (value.clamp(0.0, 255.0) / bucket_width).floor() as usize;
    index.min(len - 1)
}
