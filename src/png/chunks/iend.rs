use crate::png::consts::IEND_CHUNK_TYPE;

use super::Chunk;

pub struct Iend;

impl Iend {
    pub fn to_bytes() -> Vec<u8> {
        Chunk::new(IEND_CHUNK_TYPE, &[]).to_bytes()
    }
}
