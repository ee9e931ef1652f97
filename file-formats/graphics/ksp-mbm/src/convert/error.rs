use ::image::error::ImageError;
use thiserror::Error;

/// Errors that can occur during texture conversion operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error surfaced by the external PNG codec
    #[error("PNG codec error: {0}")]
    Png(#[from] ImageError),
    /// PNG color type other than 8-bit RGB or RGBA
    #[error("Unsupported PNG color type {0:?}. Only 8-bit RGB and RGBA are supported.")]
    UnsupportedColorType(::image::ColorType),
    /// Pixel buffer length does not match the declared dimensions
    #[error("Dimensions are {width}x{height}, but there are {actual} bytes actually in content.")]
    MismatchedDimensions {
        /// Declared width in pixels
        width: u32,
        /// Declared height in pixels
        height: u32,
        /// Actual pixel buffer length in bytes
        actual: usize,
    },
    /// TGA dimension fields are 16-bit; larger images cannot be converted
    #[error("TGA supports dimensions up to 65,535, got {0}x{1}")]
    DimensionsTooLarge(u32, u32),
    /// The source container failed to parse
    #[error("{0}")]
    Parse(#[from] crate::parser::Error),
    /// The destination container failed to encode
    #[error("{0}")]
    Encode(#[from] crate::encode::Error),
}
