use flate2::Compression;

use super::{consts::WIDTH_CEILING, PngError, Result};

/// Smallest ceiling for which halving the width always terminates.
pub const MIN_WIDTH_CEILING: usize = 2;
/// Largest ceiling whose pixel width still fits the IHDR field.
pub const MAX_WIDTH_CEILING: usize = (u32::MAX / 8) as usize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CompressionLevel {
    None,
    Fast,
    Default,
    #[default]
    Best,
}

impl From<CompressionLevel> for Compression {
    fn from(value: CompressionLevel) -> Self {
        match value {
            CompressionLevel::None => Compression::none(),
            CompressionLevel::Fast => Compression::fast(),
            CompressionLevel::Default => Compression::default(),
            CompressionLevel::Best => Compression::best(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncoderConfig {
    pub compression_level: CompressionLevel,
    /// Rows are kept strictly narrower than this many content bytes.
    pub width_ceiling: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            compression_level: CompressionLevel::default(),
            width_ceiling: WIDTH_CEILING,
        }
    }
}

impl EncoderConfig {
    pub fn builder() -> PartialEncoderConfig {
        PartialEncoderConfig::new()
    }

    /// Fields are public, so the encoder re-checks a config before using it.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_WIDTH_CEILING..=MAX_WIDTH_CEILING).contains(&self.width_ceiling) {
            return Err(PngError::InvalidConfig(format!(
                "width ceiling {} is outside {MIN_WIDTH_CEILING}..={MAX_WIDTH_CEILING}",
                self.width_ceiling
            )));
        }

        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PartialEncoderConfig {
    compression_level: Option<CompressionLevel>,
    width_ceiling: Option<usize>,
}

impl PartialEncoderConfig {
    pub fn new() -> Self {
        Self {
            compression_level: None,
            width_ceiling: None,
        }
    }

    pub fn compression_level(mut self, compression_level: CompressionLevel) -> Self {
        self.compression_level = Some(compression_level);
        self
    }

    pub fn width_ceiling(mut self, width_ceiling: usize) -> Self {
        self.width_ceiling = Some(width_ceiling);
        self
    }

    pub fn build(self) -> Result<EncoderConfig> {
        let config = EncoderConfig {
            compression_level: self.compression_level.unwrap_or_default(),
            width_ceiling: self.width_ceiling.unwrap_or(WIDTH_CEILING),
        };
        config.validate()?;

        Ok(config)
    }
}
