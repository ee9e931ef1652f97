//! Heuristic classification of RGBA pixel data as color map or normal map.

use crate::types::TextureKind;

/// Guess whether a 32-bit RGBA buffer holds a tangent-space normal map.
///
/// Tangent-space normal encodings keep red and blue nearly symmetric
/// around the dominant +Z blue, so the average |R−B| over pixels where
/// the two differ stays small. A buffer whose average difference is
/// below 8 is classified as a normal map; everything else, including a
/// buffer where red equals blue everywhere, follows the same rule (the
/// average is defined as 0 when no pixel differs).
///
/// The heuristic is statistical and can misclassify; its stride,
/// channels and threshold are fixed for compatibility with existing
/// converted texture sets. Callers must only invoke it for 32-bit data;
/// 24-bit images are always color maps.
pub fn classify_pixels(pixels: &[u8]) -> TextureKind {
    let mut mismatched: u64 = 0;
    let mut total_delta: u64 = 0;

    for pixel in pixels.chunks_exact(4) {
        let (r, b) = (pixel[0], pixel[2]);
        if r != b {
            mismatched += 1;
            total_delta += u64::from(r.abs_diff(b));
        }
    }

    let average = if mismatched == 0 {
        0
    } else {
        total_delta / mismatched
    };
    if average < 8 {
        TextureKind::Normal
    } else {
        TextureKind::Color
    }
}
