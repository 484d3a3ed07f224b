//! asciify - image to ASCII art converter
//!
//! Resizes an image to a character grid, optionally adjusts brightness,
//! contrast and blur, maps every pixel to a glyph from a palette and lays the
//! glyphs out as text lines. Output can carry 24-bit ANSI colors and be framed
//! with a box-drawing border.
//!
//! # Example
//! ```no_run
//! use asciify::{process_image, supports_ansi_color, AsciiConfig};
//!
//! let input = image::open("photo.jpg").unwrap();
//! let config = AsciiConfig { width: 100, color: true, ..Default::default() };
//! let art = process_image(&input, &config, supports_ansi_color).unwrap();
//! println!("{art}");
//! ```

pub mod ascii;
pub mod border;
pub mod config;
pub mod error;
pub mod filters;
pub mod lut;
pub mod processor;
pub mod terminal;

// Re-export main types for convenience
pub use ascii::{AsciiArt, Glyph};
pub use border::{BorderStyle, visible_width};
pub use config::AsciiConfig;
pub use error::{AsciiError, Result};
pub use lut::{Charset, Palette};
pub use processor::process_image;
pub use terminal::supports_ansi_color;
