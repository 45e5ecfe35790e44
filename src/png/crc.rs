const CRC_POLYNOMIAL: u32 = 0xedb88320;

static CRC_TABLE: [u32; 256] = build_table();

pub const fn build_table() -> [u32; 256] {
    let mut table = [0; 256];
    let mut n = 0;

    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;

        while k < 8 {
            c = if c & 1 == 1 {
                CRC_POLYNOMIAL ^ (c >> 1)
            } else {
                c >> 1
            };
            k += 1;
        }

        table[n] = c;
        n += 1;
    }

    table
}

/// Standard IEEE CRC-32 of `bytes`, as stored at the end of every PNG chunk.
pub fn crc32(bytes: &[u8]) -> u32 {
    CrcCalculator::new().update(bytes).finish()
}

/// Running CRC-32, so a chunk checksum can cover the type tag and the payload
/// without concatenating them first.
pub struct CrcCalculator {
    c: u32,
}

impl CrcCalculator {
    pub fn new() -> Self {
        Self { c: 0xffffffff }
    }

    pub fn update(&mut self, bytes: &[u8]) -> &mut Self {
        for byte in bytes {
            let index = (self.c ^ (*byte as u32)) & 0xff;
            self.c = CRC_TABLE[index as usize] ^ (self.c >> 8)
        }

        self
    }

    pub fn finish(&self) -> u32 {
        self.c ^ 0xffffffff
    }

    pub fn reset(&mut self) {
        self.c = 0xffffffff;
    }
}

impl Default for CrcCalculator {
    fn default() -> Self {
        Self::new()
    }
}
