//! Stream helpers for reading fixed-size fields

use std::io::{self, ErrorKind, Read};

use crate::error::FontError;

/// Read into `buf` until it is full or the stream ends
///
/// Returns the number of bytes read. Fewer than `buf.len()` means the stream
/// ended.
pub(crate) fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, FontError> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FontError::Io(e)),
        }
    }
    Ok(filled)
}

/// Discard up to `len` bytes, returning how many were available
pub(crate) fn skip<R: Read>(reader: &mut R, len: usize) -> Result<usize, FontError> {
    let skipped = io::copy(&mut reader.by_ref().take(len as u64), &mut io::sink())
        .map_err(FontError::Io)?;
    Ok(skipped as usize)
}

/// Read the character code that opens a glyph record
///
/// `Ok(None)` means the stream ended cleanly before the record.
pub(crate) fn read_record_start<R: Read>(
    reader: &mut R,
    index: usize,
) -> Result<Option<u16>, FontError> {
    let mut buf = [0u8; 2];
    match read_up_to(reader, &mut buf)? {
        0 => Ok(None),
        2 => Ok(Some(u16::from_le_bytes(buf))),
        _ => Err(FontError::TruncatedRecord {
            index,
            field: "character code",
        }),
    }
}

/// Read a field of a record that has already started
pub(crate) fn read_array<const N: usize, R: Read>(
    reader: &mut R,
    index: usize,
    field: &'static str,
) -> Result<[u8; N], FontError> {
    let mut buf = [0u8; N];
    if read_up_to(reader, &mut buf)? < N {
        return Err(FontError::TruncatedRecord { index, field });
    }
    Ok(buf)
}

pub(crate) fn read_u8<R: Read>(
    reader: &mut R,
    index: usize,
    field: &'static str,
) -> Result<u8, FontError> {
    let [byte] = read_array::<1, R>(reader, index, field)?;
    Ok(byte)
}

pub(crate) fn read_u16<R: Read>(
    reader: &mut R,
    index: usize,
    field: &'static str,
) -> Result<u16, FontError> {
    read_array::<2, R>(reader, index, field).map(u16::from_le_bytes)
}
