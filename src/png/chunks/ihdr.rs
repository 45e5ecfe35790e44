use crate::{
    png::{
        binary_utils::{read_byte, read_u32},
        color_type::ColorType,
        consts::{BIT_DEPTH, IHDR_CHUNK_TYPE, IHDR_DATA_LENGTH, PIXELS_PER_BYTE},
        reshape::Dimensions,
        PngError, Result,
    },
    png_assert,
};

use super::Chunk;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    Deflate,
    Other(u8),
}

impl From<u8> for CompressionMethod {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Deflate,
            other => Self::Other(other),
        }
    }
}

impl From<&CompressionMethod> for u8 {
    fn from(value: &CompressionMethod) -> Self {
        match value {
            CompressionMethod::Deflate => 0,
            CompressionMethod::Other(other) => *other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMethod {
    Adaptive,
    Other(u8),
}

impl From<u8> for FilterMethod {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Adaptive,
            other => Self::Other(other),
        }
    }
}

impl From<&FilterMethod> for u8 {
    fn from(value: &FilterMethod) -> Self {
        match value {
            FilterMethod::Adaptive => 0,
            FilterMethod::Other(other) => *other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterlaceMethod {
    NoInterlace,
    Adam7,
}

impl TryFrom<u8> for InterlaceMethod {
    type Error = PngError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::NoInterlace),
            1 => Ok(Self::Adam7),
            _ => Err(PngError::Parse(format!(
                "Unrecognized interlace method {value}"
            ))),
        }
    }
}

impl From<&InterlaceMethod> for u8 {
    fn from(value: &InterlaceMethod) -> Self {
        match value {
            InterlaceMethod::NoInterlace => 0,
            InterlaceMethod::Adam7 => 1,
        }
    }
}

/// Header of a 1-bit greyscale, non-interlaced image. `width` is in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ihdr {
    pub width: u32,
    pub height: u32,
    pub bit_depth: u8,
    pub color_type: ColorType,
    pub interlace_method: InterlaceMethod,
    pub compression_method: CompressionMethod,
    pub filter_method: FilterMethod,
}

impl Ihdr {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bit_depth: BIT_DEPTH,
            color_type: ColorType::Greyscale,
            compression_method: CompressionMethod::Deflate,
            filter_method: FilterMethod::Adaptive,
            interlace_method: InterlaceMethod::NoInterlace,
        }
    }

    pub fn from_dimensions(dimensions: Dimensions) -> Result<Self> {
        let (width, height) = dimensions.to_pixels()?;

        Ok(Self::new(width, height))
    }

    pub fn data(&self) -> [u8; IHDR_DATA_LENGTH] {
        let mut data = [0; IHDR_DATA_LENGTH];
        data[0..4].copy_from_slice(&self.width.to_be_bytes());
        data[4..8].copy_from_slice(&self.height.to_be_bytes());
        data[8] = self.bit_depth;
        data[9] = (&self.color_type).into();
        data[10] = (&self.compression_method).into();
        data[11] = (&self.filter_method).into();
        data[12] = (&self.interlace_method).into();

        data
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let data = self.data();

        Chunk::new(IHDR_CHUNK_TYPE, &data).to_bytes()
    }

    pub fn from_chunk(chunk: Chunk) -> Result<Self> {
        png_assert!(
            *chunk.chunk_type == *IHDR_CHUNK_TYPE,
            format!("Expected IHDR chunk, found {:?}", chunk.type_name())
        );

        png_assert!(
            chunk.chunk_data.len() == IHDR_DATA_LENGTH,
            format!(
                "Invalid IHDR chunk size, expected {}, received {}",
                IHDR_DATA_LENGTH,
                chunk.chunk_data.len()
            )
        );

        let mut offset = 0;
        let width = read_u32(&mut offset, chunk.chunk_data)?;
        let height = read_u32(&mut offset, chunk.chunk_data)?;
        let bit_depth = read_byte(&mut offset, chunk.chunk_data)?;
        let color_type = ColorType::try_from(read_byte(&mut offset, chunk.chunk_data)?)?;
        let compression_method = CompressionMethod::from(read_byte(&mut offset, chunk.chunk_data)?);
        let filter_method = FilterMethod::from(read_byte(&mut offset, chunk.chunk_data)?);
        let interlace_method = InterlaceMethod::try_from(read_byte(&mut offset, chunk.chunk_data)?)?;

        Ok(Self {
            width,
            height,
            bit_depth,
            color_type,
            compression_method,
            filter_method,
            interlace_method,
        })
    }

    /// Accepts only the layout this crate writes.
    pub fn check_compatibility(&self) -> Result<()> {
        png_assert!(
            matches!(self.compression_method, CompressionMethod::Deflate),
            "Unsupported compression method"
        );

        png_assert!(
            matches!(self.filter_method, FilterMethod::Adaptive),
            "Only adaptive filtering is supported"
        );

        png_assert!(
            self.interlace_method == InterlaceMethod::NoInterlace,
            "Interlaced images are not supported"
        );

        png_assert!(
            self.color_type == ColorType::Greyscale && self.bit_depth == BIT_DEPTH,
            format!(
                "Only 1-bit greyscale is supported, found color type {} at bit depth {}",
                u8::from(&self.color_type),
                self.bit_depth
            )
        );

        png_assert!(
            self.width > 0 && self.height > 0,
            format!("Empty image {}x{}", self.width, self.height)
        );

        png_assert!(
            self.width % PIXELS_PER_BYTE == 0,
            format!("Width {} is not a whole number of bytes", self.width)
        );

        Ok(())
    }

    /// Scanline geometry in content bytes.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: (self.width / PIXELS_PER_BYTE) as usize,
            height: self.height as usize,
        }
    }
}
