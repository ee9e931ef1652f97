/// Error types for MBM and TGA encoding operations
pub mod error;

use crate::types::{MbmHeader, MbmImage, TGA_HEADER_SIZE, TgaImage};
pub use error::Error;
use std::path::Path;

/// Serialize an MBM texture to bytes: the 20-byte header followed by the
/// raw bottom-up RGB(A) pixel data.
pub fn encode_mbm(image: &MbmImage) -> Result<Vec<u8>, Error> {
    let expected = image.header.pixel_data_len();
    if image.pixels.len() != expected {
        return Err(Error::MismatchedPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    let mut out = Vec::with_capacity(MbmHeader::SIZE + expected);
    image.header.write_to(&mut out);
    out.extend_from_slice(&image.pixels);
    Ok(out)
}

/// Serialize a TGA image to bytes: the 18-byte header followed by the raw
/// bottom-up BGR(A) pixel data.
pub fn encode_tga(image: &TgaImage) -> Result<Vec<u8>, Error> {
    let expected = image.header.pixel_data_len();
    if image.pixels.len() != expected {
        return Err(Error::MismatchedPixelData {
            expected,
            actual: image.pixels.len(),
        });
    }

    let mut out = Vec::with_capacity(TGA_HEADER_SIZE + expected);
    image.header.write_to(&mut out);
    out.extend_from_slice(&image.pixels);
    Ok(out)
}

/// Encode an MBM texture and write it to the file system.
pub fn save_mbm<Q>(image: &MbmImage, path: Q) -> Result<(), Error>
where
    Q: AsRef<Path>,
{
    let bytes = encode_mbm(image)?;
    std::fs::write(&path, bytes).map_err(|e| Error::FileSystem(path.as_ref().to_owned(), e))
}

/// Encode a TGA image and write it to the file system.
pub fn save_tga<Q>(image: &TgaImage, path: Q) -> Result<(), Error>
where
    Q: AsRef<Path>,
{
    let bytes = encode_tga(image)?;
    std::fs::write(&path, bytes).map_err(|e| Error::FileSystem(path.as_ref().to_owned(), e))
}
