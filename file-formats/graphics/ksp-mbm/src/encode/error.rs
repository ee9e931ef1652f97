use thiserror::Error;

/// Errors that can occur during MBM/TGA encoding operations
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel buffer length does not match the header's dimensions
    #[error("Header describes {expected} bytes of pixel data, but there are {actual} actually in the image.")]
    MismatchedPixelData {
        /// Length implied by width, height and bit depth
        expected: usize,
        /// Actual length of the pixel buffer
        actual: usize,
    },
    /// Filesystem operation failed
    #[error("Failed to proceed {0}, due: {1}")]
    FileSystem(std::path::PathBuf, std::io::Error),
}
