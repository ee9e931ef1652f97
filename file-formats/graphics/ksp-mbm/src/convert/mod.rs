//! Conversions between the three texture layouts.
//!
//! MBM and TGA are decoded and encoded natively; PNG goes through the
//! external codec in the `image` crate, which is asked for exactly the
//! color type implied by the bit depth (no automatic conversion). The
//! [`Conversion`] enum unifies the four supported transcoding directions
//! behind a single buffer-to-buffer entry point.

/// Heuristic color/normal map classification
pub mod classify;
/// Error types for conversion operations
pub mod error;
/// Scanline-order and channel-order transforms
pub mod transform;

pub use classify::classify_pixels;
pub use error::Error;
pub use transform::{flip_rows, swap_red_blue};

use crate::encode::{encode_mbm, encode_tga};
use crate::parser::{parse_mbm, parse_tga};
use crate::types::*;
use ::image::codecs::png::PngDecoder;
use ::image::{ColorType, DynamicImage, ImageDecoder, ImageFormat, RgbImage, RgbaImage};
use std::io::Cursor;

/// Convert a decoded MBM texture into a top-down RGB(A) image.
///
/// Only the scanline order changes; both layouts store channels as
/// R,G,B[,A]. The texture kind is not representable in the result.
pub fn mbm_to_image(mbm: &MbmImage) -> Result<DynamicImage, Error> {
    let header = &mbm.header;
    let mismatch = Error::MismatchedDimensions {
        width: header.width,
        height: header.height,
        actual: mbm.pixels.len(),
    };
    let flipped = flip_rows(
        &mbm.pixels,
        header.width,
        header.height,
        header.depth.bytes_per_pixel(),
    );

    match header.depth {
        BitDepth::Rgb24 => RgbImage::from_raw(header.width, header.height, flipped)
            .map(DynamicImage::ImageRgb8)
            .ok_or(mismatch),
        BitDepth::Rgba32 => RgbaImage::from_raw(header.width, header.height, flipped)
            .map(DynamicImage::ImageRgba8)
            .ok_or(mismatch),
    }
}

/// Convert a top-down RGB(A) image into an MBM texture.
///
/// Images with any sample layout other than 8-bit RGB or RGBA are
/// rejected rather than converted. For RGBA input the texture kind is
/// inferred with [`classify_pixels`]; 24-bit images are always color maps.
pub fn image_to_mbm(image: DynamicImage) -> Result<MbmImage, Error> {
    match image {
        DynamicImage::ImageRgb8(buf) => {
            let (width, height) = buf.dimensions();
            let pixels = flip_rows(buf.as_raw(), width, height, 3);
            Ok(MbmImage::new(
                width,
                height,
                TextureKind::Color,
                BitDepth::Rgb24,
                pixels,
            ))
        }
        DynamicImage::ImageRgba8(buf) => {
            let (width, height) = buf.dimensions();
            let pixels = flip_rows(buf.as_raw(), width, height, 4);
            let kind = classify_pixels(&pixels);
            Ok(MbmImage::new(
                width,
                height,
                kind,
                BitDepth::Rgba32,
                pixels,
            ))
        }
        other => Err(Error::UnsupportedColorType(other.color())),
    }
}

/// Convert a decoded MBM texture into a TGA image.
///
/// Only the channel order changes; both layouts store the bottom row
/// first. The texture kind has no TGA counterpart and is dropped.
pub fn mbm_to_tga(mbm: &MbmImage) -> Result<TgaImage, Error> {
    let header = &mbm.header;
    if header.width > u16::MAX as u32 || header.height > u16::MAX as u32 {
        return Err(Error::DimensionsTooLarge(header.width, header.height));
    }

    let pixels = swap_red_blue(&mbm.pixels, header.depth.bytes_per_pixel());
    Ok(TgaImage {
        header: TgaHeader {
            width: header.width as u16,
            height: header.height as u16,
            depth: header.depth,
        },
        pixels,
    })
}

/// Convert a decoded TGA image into an MBM texture, inferring the texture
/// kind from 32-bit pixel data.
pub fn tga_to_mbm(tga: &TgaImage) -> MbmImage {
    let depth = tga.header.depth;
    let pixels = swap_red_blue(&tga.pixels, depth.bytes_per_pixel());
    let kind = match depth {
        BitDepth::Rgba32 => classify_pixels(&pixels),
        BitDepth::Rgb24 => TextureKind::Color,
    };
    MbmImage::new(
        tga.header.width as u32,
        tga.header.height as u32,
        kind,
        depth,
        pixels,
    )
}

/// Transcode MBM bytes into PNG bytes.
pub fn mbm_to_png_bytes(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mbm = parse_mbm(input)?;
    let image = mbm_to_image(&mbm)?;

    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Transcode PNG bytes into MBM bytes.
///
/// The PNG color type is inspected before decoding; anything but 8-bit
/// truecolor (with or without alpha) is rejected so the codec never
/// auto-converts palette or grayscale data.
pub fn png_to_mbm_bytes(input: &[u8]) -> Result<Vec<u8>, Error> {
    let decoder = PngDecoder::new(Cursor::new(input))?;
    let color = decoder.color_type();
    if !matches!(color, ColorType::Rgb8 | ColorType::Rgba8) {
        return Err(Error::UnsupportedColorType(color));
    }

    let image = DynamicImage::from_decoder(decoder)?;
    let mbm = image_to_mbm(image)?;
    Ok(encode_mbm(&mbm)?)
}

/// Transcode MBM bytes into TGA bytes.
pub fn mbm_to_tga_bytes(input: &[u8]) -> Result<Vec<u8>, Error> {
    let mbm = parse_mbm(input)?;
    let tga = mbm_to_tga(&mbm)?;
    Ok(encode_tga(&tga)?)
}

/// Transcode TGA bytes into MBM bytes.
pub fn tga_to_mbm_bytes(input: &[u8]) -> Result<Vec<u8>, Error> {
    let tga = parse_tga(input)?;
    let mbm = tga_to_mbm(&tga);
    Ok(encode_mbm(&mbm)?)
}

/// One of the four supported transcoding directions.
///
/// The closed set of ordered source/target pairs over {MBM, PNG, TGA},
/// excluding identity pairs and the PNG↔TGA pairs the tools do not offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// MBM texture to PNG image
    MbmToPng,
    /// PNG image to MBM texture
    PngToMbm,
    /// MBM texture to TGA image
    MbmToTga,
    /// TGA image to MBM texture
    TgaToMbm,
}

impl Conversion {
    /// Transcode a whole source container into a whole target container.
    pub fn run(self, input: &[u8]) -> Result<Vec<u8>, Error> {
        match self {
            Conversion::MbmToPng => mbm_to_png_bytes(input),
            Conversion::PngToMbm => png_to_mbm_bytes(input),
            Conversion::MbmToTga => mbm_to_tga_bytes(input),
            Conversion::TgaToMbm => tga_to_mbm_bytes(input),
        }
    }

    /// File extension of the target container, without the dot
    pub fn target_extension(self) -> &'static str {
        match self {
            Conversion::MbmToPng => "png",
            Conversion::PngToMbm | Conversion::TgaToMbm => "mbm",
            Conversion::MbmToTga => "tga",
        }
    }
}
