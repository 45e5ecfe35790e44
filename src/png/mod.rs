use binary_utils::read_bytes;
use chunks::{idat::Idat, iend::Iend, ihdr::Ihdr, Chunk};
use consts::{IDAT_CHUNK_MAX_SIZE, IDAT_CHUNK_TYPE, IEND_CHUNK_TYPE, PNG_SIGNATURE};
use deflate::{compress_scanlines, uncompress_scanlines};
use reshape::reshape_within;

use crate::png_assert;

pub use chunks::build_chunk;
pub use color_type::ColorType;
pub use config::{CompressionLevel, EncoderConfig, PartialEncoderConfig};
pub use consts::WIDTH_CEILING;
pub use crc::{build_table, crc32, CrcCalculator};
pub use error::{PngError, Result};
pub use reshape::{reshape, Dimensions, Scanlines};

mod binary_utils;
pub mod chunks;
mod color_type;
pub mod config;
mod consts;
pub mod crc;
mod deflate;
mod error;
pub mod reshape;

/// Encodes `data` as a 1-bit greyscale PNG no wider than the display allows.
pub fn generate(data: &[u8]) -> Result<Vec<u8>> {
    generate_with_config(data, &EncoderConfig::default())
}

pub fn generate_with_config(data: &[u8], config: &EncoderConfig) -> Result<Vec<u8>> {
    encode(data, config, IDAT_CHUNK_MAX_SIZE as usize)
}

fn encode(data: &[u8], config: &EncoderConfig, idat_chunk_size: usize) -> Result<Vec<u8>> {
    config.validate()?;

    if data.is_empty() {
        return Err(PngError::InvalidInput(
            "cannot encode an empty buffer, the image would have zero width".to_string(),
        ));
    }

    let scanlines = reshape_within(data, config.width_ceiling);
    let ihdr = Ihdr::from_dimensions(scanlines.dimensions())?;
    let compressed_data = compress_scanlines(scanlines.as_bytes(), config.compression_level)?;

    let mut encoded_png: Vec<u8> = Vec::with_capacity(compressed_data.len() + 64);
    encoded_png.extend_from_slice(PNG_SIGNATURE);
    encoded_png.extend_from_slice(&ihdr.to_bytes());
    Idat::encode_stream(&compressed_data, idat_chunk_size, &mut encoded_png);
    encoded_png.extend_from_slice(&Iend::to_bytes());

    log::debug!(
        "encoded {} bytes as a {}x{} png of {} bytes",
        data.len(),
        ihdr.width,
        ihdr.height,
        encoded_png.len()
    );

    Ok(encoded_png)
}

/// A png produced by [`generate`], read back.
#[derive(Debug, Clone)]
pub struct DecodedPng {
    pub header: Ihdr,
    pub scanlines: Scanlines,
    /// Type tags in file order.
    pub chunk_types: Vec<String>,
}

impl DecodedPng {
    /// Content bytes, row-major. The original input followed by zero padding.
    pub fn content(&self) -> Vec<u8> {
        self.scanlines.content()
    }
}

/// Reads back the narrow format [`generate`] writes: 1-bit greyscale,
/// not interlaced, every row unfiltered. Every chunk crc is checked.
pub fn read_png(bytes: &[u8]) -> Result<DecodedPng> {
    let mut offset: usize = 0;
    let signature = read_bytes(&mut offset, bytes, PNG_SIGNATURE.len()).map_err(|_| {
        PngError::Parse("File is too short to be a png file".to_string())
    })?;

    png_assert!(
        *signature == *PNG_SIGNATURE,
        "File does not appear to be a png file (signature missing)"
    );

    let ihdr_chunk = Chunk::from_bytes(bytes, &mut offset)?;
    ihdr_chunk.verify_crc()?;
    let mut chunk_types = vec![ihdr_chunk.type_name()];
    let header = Ihdr::from_chunk(ihdr_chunk)?;
    header.check_compatibility()?;

    let mut compressed_data: Vec<u8> = Vec::new();

    loop {
        let chunk = Chunk::from_bytes(bytes, &mut offset)?;
        chunk.verify_crc()?;
        chunk_types.push(chunk.type_name());

        match chunk.chunk_type {
            t if t == IDAT_CHUNK_TYPE => compressed_data.extend_from_slice(chunk.chunk_data),
            t if t == IEND_CHUNK_TYPE => break,
            _ => {
                return Err(PngError::Parse(format!(
                    "Unrecognized chunk type: {:?}",
                    chunk.type_name()
                )))
            }
        }
    }

    if offset != bytes.len() {
        log::warn!("ignoring {} bytes after IEND", bytes.len() - offset);
    }

    png_assert!(!compressed_data.is_empty(), "No IDAT chunk found");

    let dimensions = header.dimensions();
    let filtered = uncompress_scanlines(&compressed_data, dimensions.scanlines_length())?;
    let scanlines = Scanlines::from_filtered(filtered, dimensions)?;

    Ok(DecodedPng {
        header,
        scanlines,
        chunk_types,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_bytes() {
        let png = generate(&[1, 2, 3]).unwrap();

        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        // IHDR: length 13, type, width 24, height 1, depth 1, greyscale
        assert_eq!(&png[8..12], &[0, 0, 0, 13]);
        assert_eq!(&png[12..16], b"IHDR");
        assert_eq!(&png[16..20], &24u32.to_be_bytes());
        assert_eq!(&png[20..24], &1u32.to_be_bytes());
        assert_eq!(&png[24..29], &[1, 0, 0, 0, 0]);
        assert_eq!(&png[png.len() - 12..], &build_chunk(b"IEND", &[])[..]);

        let decoded = read_png(&png).unwrap();
        assert_eq!(decoded.scanlines.as_bytes(), &[0, 1, 2, 3]);
        assert_eq!(decoded.chunk_types, vec!["IHDR", "IDAT", "IEND"]);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(generate(&[]), Err(PngError::InvalidInput(_))));
    }

    #[test]
    fn test_large_input_round_trip() {
        let data: Vec<u8> = (0..12345u32).map(|i| (i * 31 % 256) as u8).collect();
        let decoded = read_png(&generate(&data).unwrap()).unwrap();
        let content = decoded.content();

        assert_eq!(decoded.header.height, 8);
        assert_eq!(decoded.header.width, 1544 * 8);
        assert_eq!(&content[..data.len()], &data[..]);
        assert!(content[data.len()..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_configured_ceiling() {
        let config = EncoderConfig::builder()
            .width_ceiling(18)
            .compression_level(CompressionLevel::None)
            .build()
            .unwrap();
        let decoded = read_png(&generate_with_config(&[0xaa; 100], &config).unwrap()).unwrap();

        // 100 -> 50 -> 25 -> 13
        assert_eq!(decoded.scanlines.dimensions(), Dimensions { width: 13, height: 8 });
        assert_eq!(decoded.header.width, 104);
    }

    #[test]
    fn test_unvalidated_ceilings_are_rejected() {
        for width_ceiling in [0, 1] {
            let config = EncoderConfig {
                width_ceiling,
                ..EncoderConfig::default()
            };
            let err = generate_with_config(&[1, 2, 3], &config).unwrap_err();

            assert!(matches!(err, PngError::InvalidConfig(_)), "{width_ceiling}");
        }
    }

    #[test]
    fn test_split_idat_reads_back() {
        let data: Vec<u8> = (0..3000u32).map(|i| (i * 17 % 256) as u8).collect();
        let png = encode(&data, &EncoderConfig::default(), 64).unwrap();
        let single = generate(&data).unwrap();
        let decoded = read_png(&png).unwrap();
        let idat_count = decoded.chunk_types.iter().filter(|t| *t == "IDAT").count();

        assert!(idat_count > 1, "{:?}", decoded.chunk_types);
        assert_eq!(png.len(), single.len() + (idat_count - 1) * 12);
        assert_eq!(&decoded.content()[..data.len()], &data[..]);
        assert_eq!(read_png(&single).unwrap().scanlines, decoded.scanlines);
    }

    #[test]
    fn test_reader_rejects_bad_signature() {
        let mut png = generate(&[1, 2, 3]).unwrap();
        png[1] = b'Q';

        assert!(matches!(read_png(&png), Err(PngError::Parse(_))));
    }

    #[test]
    fn test_reader_rejects_corrupted_crc() {
        let mut png = generate(&[1, 2, 3]).unwrap();
        let last = png.len() - 1;
        png[last] ^= 0xff;

        assert!(matches!(read_png(&png), Err(PngError::CrcMismatch { .. })));
    }

    #[test]
    fn test_reader_rejects_missing_iend() {
        let png = generate(&[1, 2, 3]).unwrap();

        assert!(read_png(&png[..png.len() - 12]).is_err());
    }
}
