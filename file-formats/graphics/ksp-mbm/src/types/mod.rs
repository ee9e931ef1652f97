/// MBM file header structures
pub mod header;
/// Main MBM image type
pub mod image;
/// Truecolor TGA header and image types
pub mod tga;

pub use self::image::*;
pub use header::*;
pub use tga::*;
