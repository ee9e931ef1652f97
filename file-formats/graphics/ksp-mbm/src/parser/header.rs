use super::error::Error;
use super::reader::{ByteReader, Cursor, ParseResult};
use crate::types::*;
use log::*;

/// Decode the 20-byte MBM header: five consecutive little-endian u32
/// fields (magic, width, height, kind, bits per pixel).
pub fn parse_mbm_header(input: &[u8]) -> ParseResult<MbmHeader> {
    let mut reader = Cursor::new(input);

    let magic = reader.read_u32_le().map_err(|e| e.with_context("magic"))?;
    if magic != MBM_MAGIC {
        return Err(Error::WrongMagic(magic));
    }

    let width = reader.read_u32_le().map_err(|e| e.with_context("width"))?;
    let height = reader.read_u32_le().map_err(|e| e.with_context("height"))?;

    let kind_field = reader
        .read_u32_le()
        .map_err(|e| e.with_context("texture kind"))?;
    let kind = TextureKind::from_u32(kind_field).unwrap_or_else(|| {
        warn!("Unexpected texture kind {kind_field}, treating as color map");
        TextureKind::Color
    });

    let bits = reader
        .read_u32_le()
        .map_err(|e| e.with_context("bit depth"))?;
    let depth = BitDepth::from_bits(bits).ok_or(Error::UnsupportedBitDepth(bits))?;

    Ok(MbmHeader {
        width,
        height,
        kind,
        depth,
    })
}

/// Decode the fixed 18-byte TGA header. Returns the header and the offset
/// where pixel data begins (18 plus the image-ID length, which is skipped).
pub fn parse_tga_header(input: &[u8]) -> ParseResult<(TgaHeader, usize)> {
    let mut reader = Cursor::new(input);

    let id_length = reader
        .read_u8()
        .map_err(|e| e.with_context("image-ID length"))?;
    let _color_map_type = reader
        .read_u8()
        .map_err(|e| e.with_context("color-map type"))?;

    let image_type = reader
        .read_u8()
        .map_err(|e| e.with_context("image type"))?;
    if image_type != TGA_IMAGE_TYPE_TRUECOLOR {
        return Err(Error::UnsupportedImageType(image_type));
    }

    // Color-map specification and origin are unused for type 2 files.
    reader
        .skip(5)
        .map_err(|e| e.with_context("color-map specification"))?;
    let _x_origin = reader
        .read_u16_le()
        .map_err(|e| e.with_context("X origin"))?;
    let _y_origin = reader
        .read_u16_le()
        .map_err(|e| e.with_context("Y origin"))?;

    let width = reader.read_u16_le().map_err(|e| e.with_context("width"))?;
    let height = reader.read_u16_le().map_err(|e| e.with_context("height"))?;

    let bits = reader
        .read_u8()
        .map_err(|e| e.with_context("pixel depth"))?;
    let depth = BitDepth::from_bits(bits as u32).ok_or(Error::UnsupportedBitDepth(bits as u32))?;

    let descriptor = reader
        .read_u8()
        .map_err(|e| e.with_context("image descriptor"))?;
    if descriptor != 0 {
        warn!("Nonzero TGA image descriptor {descriptor:#04x}, assuming bottom-up pixel order");
    }

    Ok((
        TgaHeader {
            width,
            height,
            depth,
        },
        TGA_HEADER_SIZE + id_length as usize,
    ))
}
