pub const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
pub const CHUNK_METADATA_LENGTH: usize = 12;

pub const IHDR_CHUNK_TYPE: &[u8; 4] = b"IHDR";
pub const IHDR_DATA_LENGTH: usize = 13;

pub const IDAT_CHUNK_TYPE: &[u8; 4] = b"IDAT";
pub const IDAT_CHUNK_MAX_SIZE: u32 = (2 as u32).pow(31) - 1;

pub const IEND_CHUNK_TYPE: &[u8; 4] = b"IEND";

/// Widest row, in content bytes, the display can take: 2000 bytes is 16000
/// pixels at one bit per pixel.
pub const WIDTH_CEILING: usize = 2000;

/// At bit depth 1 every content byte packs eight pixels.
pub const PIXELS_PER_BYTE: u32 = 8;
pub const BIT_DEPTH: u8 = 1;

pub const NO_FILTER: u8 = 0;
