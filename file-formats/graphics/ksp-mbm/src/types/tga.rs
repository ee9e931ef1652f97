use super::header::BitDepth;

/// Size of the fixed TGA header in bytes.
pub const TGA_HEADER_SIZE: usize = 18;

/// The only TGA image type this crate reads or writes: uncompressed
/// truecolor. Run-length encoded and color-mapped files are rejected.
pub const TGA_IMAGE_TYPE_TRUECOLOR: u8 = 2;

/// Decoded header of an uncompressed truecolor TGA file.
///
/// Only the restricted subset the converters use is represented: image-ID
/// length 0, no color map, origin (0,0), descriptor 0. Pixel data follows
/// the header bottom row first, channels B,G,R[,A].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TgaHeader {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Pixel bit depth (24 or 32)
    pub depth: BitDepth,
}

impl TgaHeader {
    /// Expected length of the pixel data described by this header
    pub fn pixel_data_len(&self) -> usize {
        self.width as usize * self.height as usize * self.depth.bytes_per_pixel()
    }

    /// Append the 18-byte encoded header to `out`, with every reserved
    /// and color-map field zeroed and the image type fixed to truecolor
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.push(0); // image-ID length
        out.push(0); // color-map type
        out.push(TGA_IMAGE_TYPE_TRUECOLOR);
        out.extend_from_slice(&[0; 5]); // color-map specification
        out.extend_from_slice(&0u16.to_le_bytes()); // X origin
        out.extend_from_slice(&0u16.to_le_bytes()); // Y origin
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.push(self.depth.bits() as u8);
        out.push(0); // image descriptor
    }
}

/// Decoded TGA image: header plus raw bottom-up BGR(A) pixel data.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TgaImage {
    /// Fixed 18-byte header fields
    pub header: TgaHeader,
    /// Raw pixel data, `width * height * bytes_per_pixel` bytes
    pub pixels: Vec<u8>,
}
