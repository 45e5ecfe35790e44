//! Lays a flat byte buffer out as filter-tagged scanlines whose row width
//! stays under a ceiling.
//!
//! The height is doubled and the width halved (rounding up) until the row is
//! narrow enough. The final row is zero padded when `width * height` exceeds
//! the input. The display firmware sizes its buffers from these exact
//! dimensions, so any other factorisation, even a tighter one, is wrong.

use super::{
    config::MIN_WIDTH_CEILING,
    consts::{NO_FILTER, PIXELS_PER_BYTE, WIDTH_CEILING},
    PngError, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Content bytes per row, excluding the filter byte.
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn row_length(&self) -> usize {
        self.width + 1
    }

    pub fn scanlines_length(&self) -> usize {
        self.height * self.row_length()
    }

    /// Width and height as IHDR reports them: eight pixels per content byte.
    pub fn to_pixels(&self) -> Result<(u32, u32)> {
        let width = u32::try_from(self.width)
            .ok()
            .and_then(|width| width.checked_mul(PIXELS_PER_BYTE))
            .filter(|width| *width > 0);
        let height = u32::try_from(self.height).ok().filter(|height| *height > 0);

        match (width, height) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(PngError::InvalidInput(format!(
                "{}x{} bytes cannot be expressed as png dimensions",
                self.width, self.height
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanlines {
    dimensions: Dimensions,
    bytes: Vec<u8>,
}

impl Scanlines {
    /// Wraps already filter-tagged rows, e.g. freshly inflated IDAT data.
    pub fn from_filtered(bytes: Vec<u8>, dimensions: Dimensions) -> Result<Self> {
        if bytes.len() != dimensions.scanlines_length() {
            return Err(PngError::Parse(format!(
                "expected {} scanline bytes for {}x{}, found {}",
                dimensions.scanlines_length(),
                dimensions.width,
                dimensions.height,
                bytes.len()
            )));
        }

        if let Some((row, filter)) = bytes
            .chunks(dimensions.row_length())
            .map(|row| row[0])
            .enumerate()
            .find(|(_, filter)| *filter != NO_FILTER)
        {
            return Err(PngError::Parse(format!(
                "row {row} uses filter type {filter}, only unfiltered rows are supported"
            )));
        }

        Ok(Self { dimensions, bytes })
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.bytes
            .chunks(self.dimensions.row_length())
            .map(|row| &row[1..])
    }

    /// Content bytes in row-major order, padding included.
    pub fn content(&self) -> Vec<u8> {
        self.rows().flatten().copied().collect()
    }
}

/// Reshapes under the display's [`WIDTH_CEILING`].
pub fn reshape(data: &[u8]) -> Scanlines {
    reshape_within(data, WIDTH_CEILING)
}

/// Ceilings below [`MIN_WIDTH_CEILING`] are raised to it, the halving loop
/// cannot get a row narrower than one byte.
pub(crate) fn reshape_within(data: &[u8], width_ceiling: usize) -> Scanlines {
    let width_ceiling = width_ceiling.max(MIN_WIDTH_CEILING);
    let mut width = data.len();
    let mut height = 1;

    if width < width_ceiling {
        log::debug!("size already small enough: {width}w x {height}h");
        let mut bytes = Vec::with_capacity(data.len() + 1);
        bytes.push(NO_FILTER);
        bytes.extend_from_slice(data);

        return Scanlines {
            dimensions: Dimensions { width, height },
            bytes,
        };
    }

    while width >= width_ceiling {
        height *= 2;
        width = width.div_ceil(2);
    }
    debug_assert!(width > 0);
    log::debug!("new dimensions: {width}w x {height}h");

    let dimensions = Dimensions { width, height };
    let mut bytes = Vec::with_capacity(dimensions.scanlines_length());
    let mut remaining = data;

    for _ in 0..height {
        let (row, rest) = remaining.split_at(width.min(remaining.len()));
        remaining = rest;

        bytes.push(NO_FILTER);
        bytes.extend_from_slice(row);
        bytes.resize(bytes.len() + width - row.len(), 0);
    }

    Scanlines { dimensions, bytes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_input_is_single_row() {
        let scanlines = reshape(&[1, 2, 3]);

        assert_eq!(scanlines.as_bytes(), &[0, 1, 2, 3]);
        assert_eq!(scanlines.dimensions(), Dimensions { width: 3, height: 1 });
    }

    #[test]
    fn test_just_under_ceiling() {
        let data = vec![0xff; 1999];
        let scanlines = reshape(&data);

        assert_eq!(scanlines.width(), 1999);
        assert_eq!(scanlines.height(), 1);
        assert_eq!(scanlines.as_bytes().len(), 2000);
    }

    #[test]
    fn test_at_ceiling_halves_once() {
        let data: Vec<u8> = (0..2000).map(|i| (i % 251) as u8).collect();
        let scanlines = reshape(&data);

        assert_eq!(scanlines.dimensions(), Dimensions { width: 1000, height: 2 });
        assert_eq!(scanlines.as_bytes()[0], 0);
        assert_eq!(scanlines.as_bytes()[1001], 0);
        assert_eq!(scanlines.content(), data);
    }

    #[test]
    fn test_odd_length_pads_last_row() {
        let data = vec![7; 4001];
        let scanlines = reshape(&data);

        // 4001 -> 2001 -> 1001
        assert_eq!(scanlines.dimensions(), Dimensions { width: 1001, height: 4 });
        let content = scanlines.content();
        assert_eq!(content.len(), 4004);
        assert_eq!(&content[..4001], &data[..]);
        assert_eq!(&content[4001..], &[0, 0, 0]);
    }

    #[test]
    fn test_custom_ceiling() {
        let scanlines = reshape_within(&[1, 2, 3, 4, 5], 2);

        // 5 -> 3 -> 2 -> 1
        assert_eq!(scanlines.dimensions(), Dimensions { width: 1, height: 8 });
        assert_eq!(
            scanlines.as_bytes(),
            &[0, 1, 0, 2, 0, 3, 0, 4, 0, 5, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn test_unusable_ceilings_terminate() {
        let expected = reshape_within(&[1, 2, 3], MIN_WIDTH_CEILING);

        assert_eq!(expected.dimensions(), Dimensions { width: 1, height: 4 });
        assert_eq!(reshape_within(&[1, 2, 3], 1), expected);
        assert_eq!(reshape_within(&[1, 2, 3], 0), expected);
        assert_eq!(reshape_within(&[], 0).dimensions(), Dimensions { width: 0, height: 1 });
    }

    #[test]
    fn test_empty_input_is_degenerate() {
        let scanlines = reshape(&[]);

        assert_eq!(scanlines.as_bytes(), &[0]);
        assert_eq!(scanlines.dimensions(), Dimensions { width: 0, height: 1 });
        assert!(scanlines.dimensions().to_pixels().is_err());
    }

    #[test]
    fn test_pixel_dimensions() {
        let dimensions = Dimensions { width: 3, height: 1 };

        assert_eq!(dimensions.to_pixels().unwrap(), (24, 1));
    }

    #[test]
    fn test_from_filtered_checks_length() {
        let dimensions = Dimensions { width: 2, height: 2 };

        assert!(Scanlines::from_filtered(vec![0, 1, 2, 0, 3], dimensions).is_err());
        let scanlines = Scanlines::from_filtered(vec![0, 1, 2, 0, 3, 4], dimensions).unwrap();
        assert_eq!(scanlines.content(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_from_filtered_rejects_filters() {
        let dimensions = Dimensions { width: 1, height: 2 };
        let err = Scanlines::from_filtered(vec![0, 1, 2, 3], dimensions).unwrap_err();

        assert!(err.to_string().contains("row 1 uses filter type 2"));
    }
}
