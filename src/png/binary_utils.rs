use super::{PngError, Result};

pub fn read_u32(offset: &mut usize, bytes: &[u8]) -> Result<u32> {
    let word = read_bytes(offset, bytes, 4)?;

    Ok(u32::from_be_bytes([word[0], word[1], word[2], word[3]]))
}

pub fn read_byte(offset: &mut usize, bytes: &[u8]) -> Result<u8> {
    Ok(read_bytes(offset, bytes, 1)?[0])
}

pub fn read_bytes<'a>(offset: &mut usize, bytes: &'a [u8], size: usize) -> Result<&'a [u8]> {
    let end = offset
        .checked_add(size)
        .filter(|end| *end <= bytes.len())
        .ok_or_else(|| {
            PngError::Parse(format!(
                "unexpected end of data: wanted {size} bytes at offset {}, {} available",
                offset,
                bytes.len().saturating_sub(*offset)
            ))
        })?;
    let result = &bytes[*offset..end];
    *offset = end;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_advance_offset() {
        let bytes = [0x00, 0x00, 0x01, 0x00, 0x07, 0xaa, 0xbb];
        let mut offset = 0;

        assert_eq!(read_u32(&mut offset, &bytes).unwrap(), 256);
        assert_eq!(read_byte(&mut offset, &bytes).unwrap(), 7);
        assert_eq!(read_bytes(&mut offset, &bytes, 2).unwrap(), &[0xaa, 0xbb]);
        assert_eq!(offset, bytes.len());
    }

    #[test]
    fn test_short_read_fails_without_moving() {
        let bytes = [1, 2, 3];
        let mut offset = 1;

        assert!(read_u32(&mut offset, &bytes).is_err());
        assert_eq!(offset, 1);
    }
}
