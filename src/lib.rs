//! Packs raw monochrome bit streams into 1-bit greyscale PNG files whose rows
//! stay narrow enough for small embedded displays.
//!
//! ```
//! let png = monopng::generate(&[0b1010_1010, 0xff, 0x00]).unwrap();
//! let decoded = monopng::read_png(&png).unwrap();
//!
//! assert_eq!(decoded.header.width, 24);
//! assert_eq!(decoded.content(), vec![0b1010_1010, 0xff, 0x00]);
//! ```

pub mod png;

pub use png::{
    build_chunk, crc32, generate, generate_with_config, read_png, reshape, CompressionLevel,
    DecodedPng, Dimensions, EncoderConfig, PngError, Result, Scanlines, WIDTH_CEILING,
};
