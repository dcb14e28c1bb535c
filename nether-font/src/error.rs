//! Font table error types

use std::io;

/// Font table decode/encode error types
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Stream ended before the full signature could be read
    #[error(
        "bad signature: stream ended after {found} of {} signature bytes",
        crate::SIGNATURE_LEN
    )]
    MissingSignature { found: usize },

    /// First five bytes are not "Woo!\x01"
    #[error(
        "bad signature: expected \"{}\", found {found:02X?}",
        crate::FONT_SIGNATURE.escape_ascii()
    )]
    InvalidSignature { found: [u8; crate::SIGNATURE_LEN] },

    /// A glyph record was started but the stream ended before it completed
    #[error("truncated glyph record {index}: stream ended while reading {field}")]
    TruncatedRecord { index: usize, field: &'static str },

    /// Strict encoding refused to narrow a value to a single byte
    #[error("glyph {character:#06X}: {field} {value} does not fit in one byte")]
    ValueOutOfRange {
        character: u16,
        field: &'static str,
        value: u16,
    },

    /// Underlying reader failed for a reason other than end of stream
    #[error("read error: {0}")]
    Io(#[source] io::Error),

    /// Underlying writer rejected a write
    #[error("write error: {0}")]
    Write(#[source] io::Error),

    /// Encoder options could not be parsed
    #[error("invalid encoder options: {0}")]
    Config(#[from] toml::de::Error),
}

impl FontError {
    /// Whether this error means the input is not a font table at all
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            FontError::MissingSignature { .. } | FontError::InvalidSignature { .. }
        )
    }
}
