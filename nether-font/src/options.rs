//! Encoder configuration
//!
//! Options can be built in code or read from a TOML table, for example the
//! `[font]` section of an asset manifest:
//!
//! ```toml
//! order = "by_character"
//! strict = true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FontError;

/// Order in which glyph records are written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphOrder {
    /// Ascending character code (reproducible output)
    #[default]
    ByCharacter,
    /// Whatever order the table's hash map yields
    TableOrder,
}

/// Encoder options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Record order in the output
    pub order: GlyphOrder,

    /// Fail instead of narrowing character codes or frame indices above 255.
    /// Default: false (low byte is written, matching existing tooling)
    pub strict: bool,
}

impl EncodeOptions {
    /// Options that reject glyphs the format cannot represent exactly
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    /// Parse options from a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, FontError> {
        Ok(toml::from_str(source)?)
    }
}
