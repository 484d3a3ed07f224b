use thiserror::Error;

/// Errors produced while turning an image into ASCII art
#[derive(Error, Debug)]
pub enum AsciiError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Palette must contain at least one character")]
    EmptyPalette,
}

pub type Result<T> = std::result::Result<T, AsciiError>;
