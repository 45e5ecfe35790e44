use super::{
    binary_utils::{read_bytes, read_u32},
    consts::CHUNK_METADATA_LENGTH,
    crc::CrcCalculator,
    PngError, Result,
};

pub mod idat;
pub mod iend;
pub mod ihdr;

/// Frames `payload` as `length ‖ type ‖ payload ‖ crc`, all integers big endian.
pub fn build_chunk(chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    Chunk::new(chunk_type, payload).to_bytes()
}

#[derive(Debug)]
pub struct Chunk<'a> {
    pub chunk_type: &'a [u8],
    pub chunk_data: &'a [u8],
    pub crc: u32,
}

impl<'a> Chunk<'a> {
    pub fn new(chunk_type: &'a [u8; 4], chunk_data: &'a [u8]) -> Chunk<'a> {
        Self {
            chunk_type,
            chunk_data,
            crc: Self::compute_crc(chunk_type, chunk_data),
        }
    }

    fn compute_crc(chunk_type: &[u8], chunk_data: &[u8]) -> u32 {
        CrcCalculator::new()
            .update(chunk_type)
            .update(chunk_data)
            .finish()
    }

    pub fn from_bytes(bytes: &'a [u8], offset: &mut usize) -> Result<Chunk<'a>> {
        if bytes.len().saturating_sub(*offset) < CHUNK_METADATA_LENGTH {
            return Err(PngError::Parse(format!(
                "Cannot parse chunk as it is smaller than {CHUNK_METADATA_LENGTH} bytes"
            )));
        }

        let length = read_u32(offset, bytes)?;
        let chunk_type = read_bytes(offset, bytes, 4)?;
        let chunk_data = read_bytes(offset, bytes, length as usize).map_err(|_| {
            PngError::Parse(format!(
                "Cannot parse chunk as it is smaller than specified length {length}"
            ))
        })?;
        let crc = read_u32(offset, bytes)?;

        Ok(Chunk {
            chunk_type,
            chunk_data,
            crc,
        })
    }

    pub fn type_name(&self) -> String {
        String::from_utf8_lossy(self.chunk_type).into_owned()
    }

    pub fn verify_crc(&self) -> Result<()> {
        let expected = Self::compute_crc(self.chunk_type, self.chunk_data);

        if expected != self.crc {
            return Err(PngError::CrcMismatch {
                chunk_type: self.type_name(),
                expected,
                found: self.crc,
            });
        }

        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let length = self.chunk_data.len();
        let mut result = Vec::with_capacity(CHUNK_METADATA_LENGTH + length);

        result.extend_from_slice(&(length as u32).to_be_bytes());
        result.extend_from_slice(self.chunk_type);
        result.extend_from_slice(self.chunk_data);
        result.extend_from_slice(&self.crc.to_be_bytes());

        result
    }
}
