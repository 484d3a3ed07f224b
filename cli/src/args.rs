use asciify::{AsciiConfig, BorderStyle, Charset};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asciify", about = "Convert images to ASCII art")]
pub struct Args {
    /// Input image file
    pub image: PathBuf,
    /// Output width in characters
    #[arg(long, default_value = "80")]
    pub width: u32,
    /// Output height in characters (derived from the aspect ratio if omitted)
    #[arg(long)]
    pub height: Option<u32>,
    /// Reverse the palette brightness order
    #[arg(long)]
    pub invert: bool,
    /// Write the result to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Glyph palette
    #[arg(long, value_enum, default_value = "default")]
    pub ascii_set: AsciiSet,
    /// Brightness factor (1.0 leaves the image unchanged)
    #[arg(long, default_value = "1.0")]
    pub brightness: f32,
    /// Contrast factor (1.0 leaves the image unchanged)
    #[arg(long, default_value = "1.0")]
    pub contrast: f32,
    /// Emit 24-bit ANSI colors
    #[arg(long)]
    pub color: bool,
    /// Gaussian blur radius (0 disables)
    #[arg(long, default_value = "0.0")]
    pub blur: f32,
    /// Frame style
    #[arg(long, value_enum, default_value = "none")]
    pub border: BorderArg,
    /// Show a centered 20-line preview, confirming before saving to --output
    #[arg(long)]
    pub preview: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AsciiSet {
    Default,
    Simple,
    Complex,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BorderArg {
    Simple,
    Double,
    Rounded,
    None,
}

impl From<AsciiSet> for Charset {
    fn from(set: AsciiSet) -> Self {
        match set {
            AsciiSet::Default => Charset::Default,
            AsciiSet::Simple => Charset::Simple,
            AsciiSet::Complex => Charset::Complex,
        }
    }
}

impl BorderArg {
    pub fn style(self) -> Option<BorderStyle> {
        match self {
            BorderArg::Simple => Some(BorderStyle::Simple),
            BorderArg::Double => Some(BorderStyle::Double),
            BorderArg::Rounded => Some(BorderStyle::Rounded),
            BorderArg::None => None,
        }
    }
}

impl Args {
    pub fn config(&self) -> AsciiConfig {
        AsciiConfig {
            width: self.width,
            height: self.height,
            brightness: self.brightness,
            contrast: self.contrast,
            blur: self.blur,
            charset: self.ascii_set.into(),
            invert: self.invert,
            color: self.color,
            border: self.border.style(),
        }
    }
}
