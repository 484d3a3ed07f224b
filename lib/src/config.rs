use crate::border::BorderStyle;
use crate::error::{AsciiError, Result};
use crate::lut::Charset;

/// Configuration for ASCII art conversion
#[derive(Debug, Clone)]
pub struct AsciiConfig {
    /// Output grid
    pub width: u32,              // character columns, default 80
    pub height: Option<u32>,     // character rows, derived from aspect ratio when None

    /// Image adjustments
    pub brightness: f32,         // 1.0 is a no-op, 0.0 is black
    pub contrast: f32,           // 1.0 is a no-op, 0.0 is flat gray
    pub blur: f32,               // Gaussian radius, <= 0.0 disables

    /// Glyphs
    pub charset: Charset,        // default Charset::Default
    pub invert: bool,            // default false
    pub color: bool,             // 24-bit ANSI foreground, default false

    /// Decoration
    pub border: Option<BorderStyle>, // default None
}

impl Default for AsciiConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: None,

            brightness: 1.0,
            contrast: 1.0,
            blur: 0.0,

            charset: Charset::Default,
            invert: false,
            color: false,

            border: None,
        }
    }
}

impl AsciiConfig {
    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(AsciiError::InvalidConfig("width must be at least 1".to_string()));
        }
        if self.height == Some(0) {
            return Err(AsciiError::InvalidConfig("height must be at least 1".to_string()));
        }
        // Negative factors clip like any other blend, blur <= 0 is a no-op
        for (name, value) in [
            ("brightness", self.brightness),
            ("contrast", self.contrast),
            ("blur", self.blur),
        ] {
            if !value.is_finite() {
                return Err(AsciiError::InvalidConfig(format!(
                    "{name} must be a finite number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
