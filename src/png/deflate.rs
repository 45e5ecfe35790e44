use std::io::{Read, Write};

use flate2::{read::ZlibDecoder, write::ZlibEncoder};

use super::{config::CompressionLevel, PngError, Result};

pub fn compress_scanlines(scanlines: &[u8], level: CompressionLevel) -> Result<Vec<u8>> {
    let mut e = ZlibEncoder::new(Vec::new(), level.into());
    e.write_all(scanlines)?;
    let compressed = e.finish()?;

    log::debug!(
        "compressed {} scanline bytes into {}",
        scanlines.len(),
        compressed.len()
    );

    Ok(compressed)
}

/// Inflates at most one byte past `expected_length`, so a stream that
/// disagrees with its header fails without being fully expanded.
pub fn uncompress_scanlines(compressed: &[u8], expected_length: usize) -> Result<Vec<u8>> {
    // header dimensions are untrusted, so only a bounded capacity hint
    let mut scanlines = Vec::with_capacity(expected_length.min(1 << 20));
    ZlibDecoder::new(compressed)
        .take((expected_length as u64).saturating_add(1))
        .read_to_end(&mut scanlines)?;

    if scanlines.len() > expected_length {
        return Err(PngError::Parse(format!(
            "IDAT data inflates past the {expected_length} scanline bytes the header declares"
        )));
    }

    Ok(scanlines)
}
