/// Error types for MBM and TGA parsing operations
pub mod error;
mod header;
/// Native byte reading utilities
mod reader;

use crate::types::*;
pub use error::{Error, LoadError};
pub use header::{parse_mbm_header, parse_tga_header};
use log::*;
use reader::{ByteReader, Cursor};
pub use reader::ParseResult;
use std::path::Path;

/// Read an MBM texture from the file system.
pub fn load_mbm<Q>(path: Q) -> Result<MbmImage, LoadError>
where
    Q: AsRef<Path>,
{
    let input =
        std::fs::read(&path).map_err(|e| LoadError::FileSystem(path.as_ref().to_owned(), e))?;
    Ok(parse_mbm(&input)?)
}

/// Read an uncompressed truecolor TGA image from the file system.
pub fn load_tga<Q>(path: Q) -> Result<TgaImage, LoadError>
where
    Q: AsRef<Path>,
{
    let input =
        std::fs::read(&path).map_err(|e| LoadError::FileSystem(path.as_ref().to_owned(), e))?;
    Ok(parse_tga(&input)?)
}

/// Parse an MBM texture from a byte slice.
///
/// Exactly `width * height * bytes_per_pixel` bytes of pixel data are
/// consumed after the header; a shorter file is an error, surplus bytes
/// are ignored.
pub fn parse_mbm(input: &[u8]) -> ParseResult<MbmImage> {
    let header = parse_mbm_header(input).map_err(|e| e.with_context("header"))?;

    let mut reader = Cursor::new(&input[MbmHeader::SIZE..]);
    let pixels = reader
        .read_bytes(header.pixel_data_len())
        .map_err(|e| e.with_context("pixel data"))?;
    if reader.remaining() > 0 {
        debug!(
            "Ignoring {} trailing bytes after MBM pixel data",
            reader.remaining()
        );
    }

    Ok(MbmImage { header, pixels })
}

/// Parse an uncompressed truecolor TGA image from a byte slice.
///
/// The image-ID field, when present, is skipped. The same exact-length
/// rule as [`parse_mbm`] applies to the pixel data.
pub fn parse_tga(input: &[u8]) -> ParseResult<TgaImage> {
    let (header, data_offset) = parse_tga_header(input).map_err(|e| e.with_context("header"))?;

    if input.len() < data_offset {
        return Err(Error::UnexpectedEof.with_context("image-ID field"));
    }
    let mut reader = Cursor::new(&input[data_offset..]);
    let pixels = reader
        .read_bytes(header.pixel_data_len())
        .map_err(|e| e.with_context("pixel data"))?;
    if reader.remaining() > 0 {
        debug!(
            "Ignoring {} trailing bytes after TGA pixel data",
            reader.remaining()
        );
    }

    Ok(TgaImage { header, pixels })
}
