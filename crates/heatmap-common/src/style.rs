//! Palette configuration for heatmap rendering.
//!
//! A palette is an ordered list of colors from least to most intense. The
//! built-in palette is ColorBrewer's 11-class RdYlBu, reversed so that cold
//! temperatures are blue. Alternative palettes can be loaded from JSON:
//!
//! ```json
//! { "name": "greys", "colors": ["#f7f7f7", "#cccccc", "#969696", "#525252"] }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Built-in legend colors (colorbrewer2.org, RdYlBu reversed).
pub const DEFAULT_PALETTE: [&str; 11] = [
    "#313695", "#4575b4", "#74add1", "#abd9e9", "#e0f3f8", "#ffffbf", "#fee090", "#fdae61",
    "#f46d43", "#d73027", "#a50026",
];

/// Color representation supporting multiple formats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Color {
    /// Hex string: "#RRGGBB" or "#RRGGBBAA"
    Hex(String),

    /// Explicit RGBA
    Rgba { r: u8, g: u8, b: u8, a: u8 },
}

impl Color {
    pub fn hex(s: impl Into<String>) -> Self {
        Color::Hex(s.into())
    }

    /// Convert to RGBA tuple, `None` if a hex string is malformed.
    pub fn try_to_rgba(&self) -> Option<(u8, u8, u8, u8)> {
        match self {
            Color::Hex(s) => parse_hex_color(s),
            Color::Rgba { r, g, b, a } => Some((*r, *g, *b, *a)),
        }
    }

    /// Convert to RGBA tuple; malformed hex strings become opaque black.
    pub fn to_rgba(&self) -> (u8, u8, u8, u8) {
        self.try_to_rgba().unwrap_or((0, 0, 0, 255))
    }

    /// CSS color string suitable for an SVG `fill` attribute.
    pub fn to_css(&self) -> String {
        match self {
            Color::Hex(s) => s.to_lowercase(),
            Color::Rgba { r, g, b, a: 255 } => format!("#{:02x}{:02x}{:02x}", r, g, b),
            Color::Rgba { r, g, b, a } => format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn parse_hex_color(s: &str) -> Option<(u8, u8, u8, u8)> {
    let s = s.strip_prefix('#')?;
    if !s.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&s[range], 16).ok();

    match s.len() {
        6 => Some((channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
        8 => Some((channel(0..2)?, channel(2..4)?, channel(4..6)?, channel(6..8)?)),
        _ => None,
    }
}

/// Ordered palette, least to most intense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Human-readable name
    #[serde(default = "default_name")]
    pub name: String,

    /// Colors from coldest to warmest
    pub colors: Vec<Color>,
}

fn default_name() -> String {
    "custom".to_string()
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            name: "rdylbu-11".to_string(),
            colors: DEFAULT_PALETTE.iter().map(|c| Color::hex(*c)).collect(),
        }
    }
}

impl Palette {
    /// Load and validate a palette from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StyleError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| StyleError::IoError(e.to_string()))?;
        Self::from_json(&content)
    }

    /// Parse and validate a palette from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, StyleError> {
        let palette: Palette =
            serde_json::from_str(json).map_err(|e| StyleError::ParseError(e.to_string()))?;
        palette.validate()?;
        Ok(palette)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if self.colors.len() < 2 {
            return Err(StyleError::ValidationError(format!(
                "{}: palette must have at least 2 colors",
                self.name
            )));
        }

        for (i, color) in self.colors.iter().enumerate() {
            if color.try_to_rgba().is_none() {
                return Err(StyleError::ValidationError(format!(
                    "{}: color {} ({:?}) is not a valid hex color",
                    self.name, i, color
                )));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }
}

/// Style-related errors.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 11);
        palette.validate().unwrap();
        assert_eq!(palette.colors[0].to_rgba(), (0x31, 0x36, 0x95, 255));
        assert_eq!(palette.colors[10].to_css(), "#a50026");
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!(Color::hex("#FF5500").to_rgba(), (255, 85, 0, 255));
        assert_eq!(Color::hex("#FF550080").to_rgba(), (255, 85, 0, 128));
        assert_eq!(Color::hex("FF5500").try_to_rgba(), None);
        assert_eq!(Color::hex("#GGGGGG").try_to_rgba(), None);
        assert_eq!(Color::hex("#ÿÿÿ").try_to_rgba(), None);

        let rgba = Color::Rgba {
            r: 16,
            g: 32,
            b: 48,
            a: 255,
        };
        assert_eq!(rgba.to_css(), "#102030");
    }

    #[test]
    fn test_palette_from_json() {
        let json = r##"{"name": "greys", "colors": ["#f7f7f7", "#cccccc", "#525252"]}"##;
        let palette = Palette::from_json(json).unwrap();
        assert_eq!(palette.name, "greys");
        assert_eq!(palette.len(), 3);
    }

    #[test]
    fn test_palette_validation() {
        let too_small = r##"{"colors": ["#f7f7f7"]}"##;
        assert!(matches!(
            Palette::from_json(too_small),
            Err(StyleError::ValidationError(_))
        ));

        let bad_color = r##"{"colors": ["#f7f7f7", "blue"]}"##;
        assert!(matches!(
            Palette::from_json(bad_color),
            Err(StyleError::ValidationError(_))
        ));

        assert!(matches!(
            Palette::from_json("not json"),
            Err(StyleError::ParseError(_))
        ));
    }
}
