//! Parser, encoder and converters for Kerbal Space Program MBM textures.
//!
//! MBM is the game's raw texture container: a 20-byte little-endian header
//! (magic, width, height, color/normal tag, bit depth) followed by 24- or
//! 32-bit pixel data stored bottom row first in R,G,B\[,A\] order. This
//! crate reads and writes that container, reads and writes the uncompressed
//! truecolor TGA subset, and converts both to and from PNG via the `image`
//! crate.
//!
//! # Examples
//!
//! ```no_run
//! use ksp_mbm::convert::mbm_to_image;
//! use ksp_mbm::parser::load_mbm;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let texture = load_mbm("kerbalEVA_normal.mbm")?;
//! println!("{}x{} {}", texture.width(), texture.height(), texture.kind());
//!
//! let image = mbm_to_image(&texture)?;
//! image.save("kerbalEVA_normal.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! Buffer-to-buffer transcoding without touching the filesystem goes
//! through [`convert::Conversion`]:
//!
//! ```no_run
//! use ksp_mbm::convert::Conversion;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mbm = std::fs::read("heatshield.mbm")?;
//! let png = Conversion::MbmToPng.run(&mbm)?;
//! std::fs::write("heatshield.png", png)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

/// Conversions between MBM, TGA and PNG
pub mod convert;
/// MBM and TGA serialization
pub mod encode;
/// MBM and TGA deserialization
pub mod parser;
/// Shared header and image types
pub mod types;
