//! Font table codec
//!
//! - `read` - Decoding a byte stream into a [`FontTable`](crate::FontTable)
//! - `write` - Encoding a table back into the byte layout
//! - `io` - Stream helpers that tell a clean end of stream from a truncated read
//! - `tests` - Codec test suite

mod io;
mod read;
mod write;


pub use read::{decode_font_table, parse_font_table};
pub use write::{encode_font_table, encode_to_vec};
