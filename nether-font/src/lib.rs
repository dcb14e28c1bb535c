//! Nether-Font: bitmap font table codec for Nethercore's asset pipeline
//!
//! This crate reads and writes the "Woo!" font table format used by the
//! display fonts shipped with legacy game data. A font table maps character
//! codes to per-glyph geometry (cell width/height) and a frame index into an
//! external sprite sheet. Pixel data is not part of the format.
//!
//! # Format Overview
//!
//! ```text
//! Decoded layout:
//!   0x00: signature "Woo!\x01" (5 bytes)
//!   0x05: reserved header (7 bytes, skipped)
//!   0x0C: glyph records (14 bytes each, until end of stream)
//!
//! Glyph record (14 bytes):
//!   char_code   u16 LE
//!   filler1     1 byte
//!   width       u8
//!   height      u8
//!   filler2     3 bytes
//!   frame_index u16 LE
//!   filler3     4 bytes
//! ```
//!
//! There is no glyph count. The record list ends when the stream ends cleanly
//! at a record boundary; a stream ending inside a record is an error.
//!
//! # Encoder Quirks
//!
//! The encoder reproduces the layout produced by existing tooling, which is
//! not symmetric with the decoder:
//!
//! | Field | Decode | Encode |
//! |-------|--------|--------|
//! | Header after signature | 7 bytes skipped | 8 bytes written ([`ENCODE_HEADER`]) |
//! | Character code | u16 LE | low byte only |
//! | Frame index | u16 LE | low byte only |
//! | Record size | 14 bytes | 12 bytes |
//!
//! Decode followed by encode is therefore not byte-exact. Use
//! [`EncodeOptions::strict`] to reject glyphs whose character code or frame
//! index would be narrowed.
//!
//! # Usage
//!
//! ```
//! use nether_font::{EncodeOptions, FontGlyph, FontTable};
//!
//! let mut table = FontTable::new();
//! table.insert(FontGlyph::new(u16::from(b'A'), 0, 10, 12));
//! table.insert(FontGlyph::new(u16::from(b'B'), 1, 8, 15));
//!
//! assert_eq!(table.text_metrics("AB"), (18, 15));
//! assert_eq!(table.text_metrics("A\nB"), (10, 27));
//!
//! let bytes = table.to_bytes(&EncodeOptions::default()).unwrap();
//! assert!(bytes.starts_with(b"Woo!\x01"));
//! ```

mod codec;
mod error;
mod glyph;
mod options;
mod table;

pub use codec::{decode_font_table, encode_font_table, encode_to_vec, parse_font_table};
pub use error::FontError;
pub use glyph::FontGlyph;
pub use options::{EncodeOptions, GlyphOrder};
pub use table::FontTable;

// =============================================================================
// Constants
// =============================================================================

/// Font table signature
pub const FONT_SIGNATURE: &[u8; 5] = b"Woo!\x01";

/// Signature length in bytes
pub const SIGNATURE_LEN: usize = FONT_SIGNATURE.len();

/// Reserved header bytes skipped by the decoder after the signature
pub const DECODE_HEADER_LEN: usize = 7;

/// Header bytes written by the encoder after the signature
///
/// Six constant bytes followed by the expected cell width and height, which
/// readers ignore and are always written as zero.
pub const ENCODE_HEADER: [u8; 8] = [1, 0, 0, 0, 0, 1, 0, 0];

/// Size of a glyph record as read by the decoder
pub const RECORD_LEN: usize = 14;

/// Size of a glyph record as written by the encoder
pub const ENCODED_RECORD_LEN: usize = 12;

/// Length of the filler byte following the character code
pub const FILLER1_LEN: usize = 1;

/// Length of the filler run following the cell height
pub const FILLER2_LEN: usize = 3;

/// Length of the filler run following the frame index
pub const FILLER3_LEN: usize = 4;

/// Filler written after the character code when a glyph is synthesized
pub const DEFAULT_FILLER1: [u8; FILLER1_LEN] = [0];

/// Filler written after the cell height when a glyph is synthesized
pub const DEFAULT_FILLER2: [u8; FILLER2_LEN] = [1, 0, 0];

/// Filler written after the frame index when a glyph is synthesized
pub const DEFAULT_FILLER3: [u8; FILLER3_LEN] = [1, 0, 0, 0];

// =============================================================================
// Tests
// =============================================================================
