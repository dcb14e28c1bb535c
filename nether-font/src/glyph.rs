//! Glyph record data structure

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_FILLER1, DEFAULT_FILLER2, DEFAULT_FILLER3, FILLER1_LEN, FILLER2_LEN, FILLER3_LEN,
};

/// Geometry and frame reference for a single character
///
/// The filler fields hold bytes whose meaning is unknown. They are kept
/// verbatim from the decoded record so that re-encoding reproduces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontGlyph {
    /// Character code this glyph renders
    pub character: u16,
    /// Cell width in pixels
    pub width: u8,
    /// Cell height in pixels
    pub height: u8,
    /// Frame in the external sprite sheet holding the glyph pixels
    pub frame_index: u16,
    /// Byte after the character code (observed: always 0)
    #[serde(default = "default_filler1")]
    pub filler1: [u8; FILLER1_LEN],
    /// Bytes after the cell height (observed: 1, 0, 0)
    #[serde(default = "default_filler2")]
    pub filler2: [u8; FILLER2_LEN],
    /// Bytes after the frame index (observed: 1, 0, then the character code repeated)
    #[serde(default = "default_filler3")]
    pub filler3: [u8; FILLER3_LEN],
}

fn default_filler1() -> [u8; FILLER1_LEN] {
    DEFAULT_FILLER1
}

fn default_filler2() -> [u8; FILLER2_LEN] {
    DEFAULT_FILLER2
}

fn default_filler3() -> [u8; FILLER3_LEN] {
    DEFAULT_FILLER3
}

impl FontGlyph {
    /// Create a glyph with the default filler bytes
    pub fn new(character: u16, frame_index: u16, width: u8, height: u8) -> Self {
        Self {
            character,
            width,
            height,
            frame_index,
            filler1: DEFAULT_FILLER1,
            filler2: DEFAULT_FILLER2,
            filler3: DEFAULT_FILLER3,
        }
    }

    /// Replace the filler bytes
    pub fn with_fillers(
        mut self,
        filler1: [u8; FILLER1_LEN],
        filler2: [u8; FILLER2_LEN],
        filler3: [u8; FILLER3_LEN],
    ) -> Self {
        self.filler1 = filler1;
        self.filler2 = filler2;
        self.filler3 = filler3;
        self
    }

    /// The character as a `char`, if the code is a valid scalar value
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(u32::from(self.character))
    }

    /// Whether encoding this glyph loses bits of the character code or frame index
    pub fn is_narrowed_on_encode(&self) -> bool {
        self.character > u16::from(u8::MAX) || self.frame_index > u16::from(u8::MAX)
    }
}
