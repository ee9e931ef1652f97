//! Pixel layout transforms between the MBM, TGA and PNG conventions.
//!
//! The three layouts share width, height and bytes per pixel; they differ
//! only in scanline order (MBM and TGA store the bottom row first, PNG the
//! top row) and channel order (TGA stores B,G,R[,A], the others R,G,B[,A]).
//! Moving between any two of them is therefore either a row flip or a
//! red/blue swap, never both.

/// Reverse the scanline order of a pixel buffer.
///
/// Self-inverse: applying it twice returns the original buffer. A zero
/// width or height yields an empty buffer.
pub fn flip_rows(pixels: &[u8], width: u32, height: u32, bytes_per_pixel: usize) -> Vec<u8> {
    let stride = width as usize * bytes_per_pixel;
    if stride == 0 || height == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(pixels.len());
    for row in pixels.chunks_exact(stride).rev() {
        out.extend_from_slice(row);
    }
    out
}

/// Exchange the red and blue channel of every pixel, leaving green and
/// alpha untouched.
///
/// Self-inverse, and independent of scanline order.
pub fn swap_red_blue(pixels: &[u8], bytes_per_pixel: usize) -> Vec<u8> {
    let mut out = pixels.to_vec();
    for pixel in out.chunks_exact_mut(bytes_per_pixel) {
        pixel.swap(0, 2);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn flips_two_by_two_rgb_rows() {
        // Bottom row [1..6], top row [7..12], stored bottom first.
        let bottom_up = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let top_down = flip_rows(&bottom_up, 2, 2, 3);
        assert_eq!(top_down, vec![7, 8, 9, 10, 11, 12, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn flip_is_self_inverse() {
        let pixels: Vec<u8> = (0..4 * 3 * 4).map(|n| n as u8).collect();
        let once = flip_rows(&pixels, 4, 3, 4);
        let twice = flip_rows(&once, 4, 3, 4);
        assert_eq!(twice, pixels);
    }

    #[test]
    fn flip_of_empty_image_is_empty() {
        assert!(flip_rows(&[], 0, 16, 3).is_empty());
        assert!(flip_rows(&[], 16, 0, 4).is_empty());
    }

    #[test]
    fn swaps_red_and_blue_only() {
        assert_eq!(swap_red_blue(&[10, 20, 30], 3), vec![30, 20, 10]);
        assert_eq!(swap_red_blue(&[10, 20, 30, 40], 4), vec![30, 20, 10, 40]);
    }

    #[test]
    fn swap_is_self_inverse() {
        let pixels = [1, 2, 3, 4, 5, 6, 7, 8];
        let twice = swap_red_blue(&swap_red_blue(&pixels, 4), 4);
        assert_eq!(twice, pixels.to_vec());
    }
}
