//! Font table decoding

use std::io::Read;

use super::io::{read_array, read_record_start, read_u16, read_u8, read_up_to, skip};
use crate::error::FontError;
use crate::glyph::FontGlyph;
use crate::table::FontTable;
use crate::{
    DECODE_HEADER_LEN, FILLER1_LEN, FILLER2_LEN, FILLER3_LEN, FONT_SIGNATURE, SIGNATURE_LEN,
};

/// Decode a font table from a byte stream
///
/// Records are read until the stream ends at a record boundary. A record cut
/// short by the end of the stream is an error, and no table is returned.
/// Records with a repeated character code replace the earlier record.
///
/// # Arguments
/// * `reader` - Stream positioned at the signature
///
/// # Returns
/// * `Ok(FontTable)` - All glyphs in the stream
/// * `Err(FontError)` - Bad signature, truncated record, or read failure
pub fn decode_font_table<R: Read>(mut reader: R) -> Result<FontTable, FontError> {
    read_signature(&mut reader)?;

    // Reserved header - contents are not validated
    let skipped = skip(&mut reader, DECODE_HEADER_LEN)?;
    if skipped < DECODE_HEADER_LEN {
        tracing::debug!(
            "Font table header is {} bytes (expected {}), no glyph records follow",
            skipped,
            DECODE_HEADER_LEN
        );
    }

    let mut table = FontTable::new();
    let mut index = 0;

    while let Some(character) = read_record_start(&mut reader, index)? {
        let glyph = read_record(&mut reader, index, character)?;
        tracing::trace!(
            index,
            character,
            width = glyph.width,
            height = glyph.height,
            frame_index = glyph.frame_index,
            "decoded glyph record"
        );

        if table.insert(glyph).is_some() {
            tracing::trace!(index, character, "glyph record replaces an earlier one");
        }
        index += 1;
    }

    tracing::debug!("Decoded {} glyph records ({} unique)", index, table.len());

    Ok(table)
}

/// Decode a font table from an in-memory buffer
pub fn parse_font_table(data: &[u8]) -> Result<FontTable, FontError> {
    decode_font_table(data)
}

/// Read and validate the 5-byte signature
pub(crate) fn read_signature<R: Read>(reader: &mut R) -> Result<(), FontError> {
    let mut signature = [0u8; SIGNATURE_LEN];
    let found = read_up_to(reader, &mut signature)?;
    if found < SIGNATURE_LEN {
        return Err(FontError::MissingSignature { found });
    }
    if &signature != FONT_SIGNATURE {
        return Err(FontError::InvalidSignature { found: signature });
    }
    Ok(())
}

/// Read the rest of a glyph record after its character code
pub(crate) fn read_record<R: Read>(
    reader: &mut R,
    index: usize,
    character: u16,
) -> Result<FontGlyph, FontError> {
    let filler1 = read_array::<FILLER1_LEN, R>(reader, index, "filler1")?;
    let width = read_u8(reader, index, "width")?;
    let height = read_u8(reader, index, "height")?;
    let filler2 = read_array::<FILLER2_LEN, R>(reader, index, "filler2")?;
    let frame_index = read_u16(reader, index, "frame index")?;
    let filler3 = read_array::<FILLER3_LEN, R>(reader, index, "filler3")?;

    Ok(FontGlyph {
        character,
        width,
        height,
        frame_index,
        filler1,
        filler2,
        filler3,
    })
}
