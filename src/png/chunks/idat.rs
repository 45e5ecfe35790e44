use crate::png::consts::IDAT_CHUNK_TYPE;

use super::Chunk;

pub struct Idat;

impl Idat {
    pub fn encode_bytes(bytes: &[u8]) -> Vec<u8> {
        Chunk::new(IDAT_CHUNK_TYPE, bytes).to_bytes()
    }

    /// One IDAT per `max_chunk_size` bytes of zlib stream.
    pub fn encode_stream(compressed: &[u8], max_chunk_size: usize, target: &mut Vec<u8>) {
        compressed
            .chunks(max_chunk_size.max(1))
            .for_each(|chunk_data| target.extend_from_slice(&Self::encode_bytes(chunk_data)));
    }
}
