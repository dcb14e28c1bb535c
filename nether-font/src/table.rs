//! Font table container and text metrics

use std::io::{Read, Write};

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::FontError;
use crate::glyph::FontGlyph;
use crate::options::EncodeOptions;

/// Glyphs of a font, keyed by character code
///
/// Every glyph is stored under its own `character` field. The map is private
/// so that no key can disagree with the glyph it points to.
///
/// Serializes as a list of glyphs in ascending character order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<FontGlyph>", into = "Vec<FontGlyph>")]
pub struct FontTable {
    glyphs: HashMap<u16, FontGlyph>,
}

impl FontTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a table from a reader
    pub fn load<R: Read>(reader: R) -> Result<Self, FontError> {
        codec::decode_font_table(reader)
    }

    /// Encode the table into a writer
    pub fn encode<W: Write>(&self, writer: W, options: &EncodeOptions) -> Result<(), FontError> {
        codec::encode_font_table(self, writer, options)
    }

    /// Encode the table into a new byte vector
    pub fn to_bytes(&self, options: &EncodeOptions) -> Result<Vec<u8>, FontError> {
        codec::encode_to_vec(self, options)
    }

    /// Insert a glyph under its character code, returning the glyph it replaced
    pub fn insert(&mut self, glyph: FontGlyph) -> Option<FontGlyph> {
        self.glyphs.insert(glyph.character, glyph)
    }

    /// Remove the glyph for a character code
    pub fn remove(&mut self, character: u16) -> Option<FontGlyph> {
        self.glyphs.remove(&character)
    }

    /// Get the glyph for a character code
    pub fn get(&self, character: u16) -> Option<&FontGlyph> {
        self.glyphs.get(&character)
    }

    /// Get the glyph for a `char`
    ///
    /// Characters outside the Basic Multilingual Plane have no glyph, since
    /// character codes are 16 bits wide.
    pub fn get_char(&self, c: char) -> Option<&FontGlyph> {
        u16::try_from(u32::from(c))
            .ok()
            .and_then(|code| self.get(code))
    }

    /// Whether a glyph exists for the character code
    pub fn contains(&self, character: u16) -> bool {
        self.glyphs.contains_key(&character)
    }

    /// Number of glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the table has no glyphs
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Iterate glyphs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &FontGlyph> {
        self.glyphs.values()
    }

    /// Glyphs sorted by ascending character code
    pub fn sorted_glyphs(&self) -> Vec<&FontGlyph> {
        let mut glyphs: Vec<&FontGlyph> = self.glyphs.values().collect();
        glyphs.sort_unstable_by_key(|g| g.character);
        glyphs
    }

    /// Bounding box in pixels needed to render `text`
    ///
    /// Glyphs on a line are placed edge to edge; lines stack using the
    /// tallest glyph of each line. Characters without a glyph are skipped.
    /// Both dimensions saturate at `u32::MAX`.
    ///
    /// Returns `(width, height)`.
    pub fn text_metrics(&self, text: &str) -> (u32, u32) {
        let mut width = 0u32;
        let mut height = 0u32;
        let mut line_width = 0u32;
        let mut line_height = 0u32;

        for c in text.chars() {
            if c == '\n' {
                width = width.max(line_width);
                height = height.saturating_add(line_height);
                line_width = 0;
                line_height = 0;
            } else if let Some(glyph) = self.get_char(c) {
                line_width = line_width.saturating_add(u32::from(glyph.width));
                line_height = line_height.max(u32::from(glyph.height));
            }
        }

        // Last line has no trailing newline
        width = width.max(line_width);
        height = height.saturating_add(line_height);

        (width, height)
    }
}

impl FromIterator<FontGlyph> for FontTable {
    fn from_iter<I: IntoIterator<Item = FontGlyph>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<FontGlyph> for FontTable {
    fn extend<I: IntoIterator<Item = FontGlyph>>(&mut self, iter: I) {
        for glyph in iter {
            self.insert(glyph);
        }
    }
}

impl From<Vec<FontGlyph>> for FontTable {
    fn from(glyphs: Vec<FontGlyph>) -> Self {
        glyphs.into_iter().collect()
    }
}

impl From<FontTable> for Vec<FontGlyph> {
    fn from(table: FontTable) -> Self {
        let mut glyphs: Vec<FontGlyph> = table.glyphs.into_values().collect();
        glyphs.sort_unstable_by_key(|g| g.character);
        glyphs
    }
}
