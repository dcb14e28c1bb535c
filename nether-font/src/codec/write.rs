//! Font table encoding

use std::io::Write;

use crate::error::FontError;
use crate::glyph::FontGlyph;
use crate::options::{EncodeOptions, GlyphOrder};
use crate::table::FontTable;
use crate::{ENCODE_HEADER, ENCODED_RECORD_LEN, FONT_SIGNATURE};

/// Encode a font table into a writer
///
/// The whole table is encoded in memory first and handed to the writer in one
/// `write_all`, so an option error never produces partial output.
pub fn encode_font_table<W: Write>(
    table: &FontTable,
    mut writer: W,
    options: &EncodeOptions,
) -> Result<(), FontError> {
    let output = encode_to_vec(table, options)?;
    writer.write_all(&output).map_err(FontError::Write)?;
    writer.flush().map_err(FontError::Write)
}

/// Encode a font table into a new byte vector
///
/// Layout: signature, 8 header bytes, then 12 bytes per glyph. Character
/// codes and frame indices are written as their low byte; with
/// [`EncodeOptions::strict`] a value above 255 is an error instead.
pub fn encode_to_vec(table: &FontTable, options: &EncodeOptions) -> Result<Vec<u8>, FontError> {
    let glyphs = ordered_glyphs(table, options.order);

    if options.strict {
        for glyph in &glyphs {
            check_fits_in_byte(glyph)?;
        }
    }

    let mut output = Vec::with_capacity(
        FONT_SIGNATURE.len() + ENCODE_HEADER.len() + glyphs.len() * ENCODED_RECORD_LEN,
    );

    output.extend_from_slice(FONT_SIGNATURE);

    // Constant header, then expected cell width/height (unused by readers)
    output.extend_from_slice(&ENCODE_HEADER);

    for glyph in &glyphs {
        if glyph.is_narrowed_on_encode() {
            tracing::warn!(
                "Glyph {:#06X} (frame {}) does not fit the one-byte encoding, writing low bytes only",
                glyph.character,
                glyph.frame_index
            );
        }
        write_record(&mut output, glyph);
    }

    tracing::debug!("Encoded {} glyphs into {} bytes", glyphs.len(), output.len());

    Ok(output)
}

pub(crate) fn ordered_glyphs(table: &FontTable, order: GlyphOrder) -> Vec<&FontGlyph> {
    match order {
        GlyphOrder::ByCharacter => table.sorted_glyphs(),
        GlyphOrder::TableOrder => table.iter().collect(),
    }
}

pub(crate) fn check_fits_in_byte(glyph: &FontGlyph) -> Result<(), FontError> {
    let limit = u16::from(u8::MAX);
    if glyph.character > limit {
        return Err(FontError::ValueOutOfRange {
            character: glyph.character,
            field: "character code",
            value: glyph.character,
        });
    }
    if glyph.frame_index > limit {
        return Err(FontError::ValueOutOfRange {
            character: glyph.character,
            field: "frame index",
            value: glyph.frame_index,
        });
    }
    Ok(())
}

/// Append one 12-byte glyph record
pub(crate) fn write_record(output: &mut Vec<u8>, glyph: &FontGlyph) {
    let [character_low, _] = glyph.character.to_le_bytes();
    let [frame_low, _] = glyph.frame_index.to_le_bytes();

    output.push(character_low);
    output.extend_from_slice(&glyph.filler1);
    output.push(glyph.width);
    output.push(glyph.height);
    output.extend_from_slice(&glyph.filler2);
    output.push(frame_low);
    output.extend_from_slice(&glyph.filler3);
}
