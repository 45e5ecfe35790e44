use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PngError>;

#[derive(Error, Debug)]
pub enum PngError {
    /// The input cannot be laid out as a renderable image.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid encoder config: {0}")]
    InvalidConfig(String),

    /// The zlib collaborator failed. Fatal, nothing is emitted.
    #[error("compression failed: {0}")]
    Compression(#[from] io::Error),

    #[error("png parse error: {0}")]
    Parse(String),

    #[error("crc mismatch in {chunk_type} chunk: expected {expected:#010x}, found {found:#010x}")]
    CrcMismatch {
        chunk_type: String,
        expected: u32,
        found: u32,
    },
}

#[macro_export]
macro_rules! png_assert {
    ($assert_value:expr, $msg:expr) => {
        if !$assert_value {
            return Err($crate::png::PngError::Parse($msg.to_string()));
        }
    };
}
