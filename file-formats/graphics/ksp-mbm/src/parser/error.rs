use thiserror::Error;

/// Errors that appear when loading textures from the filesystem
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file contents could not be parsed
    #[error("{0}")]
    Parsing(#[from] Error),
    /// File system error when reading the source file
    #[error("File system error with file {0}, due: {1}")]
    FileSystem(std::path::PathBuf, std::io::Error),
}

/// Errors that the MBM and TGA parsers can produce
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid magic bytes in the MBM header
    #[error("Unexpected magic value {0:#010x}. The file format is not MBM or not supported.")]
    WrongMagic(u32),
    /// Bit depth other than 24 or 32 bits per pixel
    #[error("Unsupported bit depth {0}. Only 24 and 32 bits per pixel are supported.")]
    UnsupportedBitDepth(u32),
    /// TGA image type other than uncompressed truecolor
    #[error("Unsupported TGA image type {0}. Compressed or color-mapped TGA is not supported.")]
    UnsupportedImageType(u8),
    /// Unexpected end of file while parsing
    #[error("Unexpected end of file")]
    UnexpectedEof,
    /// Parser error with context information
    #[error("Context: {0}. Error: {1}")]
    Context(String, Box<Self>),
}

impl Error {
    /// Add context information to an error
    pub fn with_context(self, context: &str) -> Self {
        Error::Context(context.to_owned(), Box::new(self))
    }
}
