//! Color-index → display-color mapping.

use std::collections::BTreeMap;

use egui::Color32;

/// Painted for an index the caller never supplied. That is a contract
/// violation on the caller's side (the palette must cover every index ever
/// written), so the compositor paints something loud rather than failing.
const MISSING_COLOR: Color32 = Color32::from_rgb(255, 0, 255);

/// Immutable mapping from a small color index to its display color.
/// Supplied by the surrounding application once per session.
#[derive(Clone, Debug, Default)]
pub struct ColorPalette {
    colors: BTreeMap<u8, Color32>,
}

impl ColorPalette {
    /// Build from the config's hex-string form. Unparseable entries are
    /// skipped with a warning.
    pub fn from_hex(colors: &BTreeMap<u8, String>) -> Self {
        let mut out = BTreeMap::new();
        for (&idx, hex) in colors {
            match parse_hex_color(hex) {
                Some(color) => {
                    out.insert(idx, color);
                }
                None => {
                    crate::log_warn!("palette: ignoring unparseable color {:?} for index {}", hex, idx);
                }
            }
        }
        Self { colors: out }
    }

    pub fn color_of(&self, index: u8) -> Color32 {
        self.colors.get(&index).copied().unwrap_or(MISSING_COLOR)
    }

    pub fn contains(&self, index: u8) -> bool {
        self.colors.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Entries in index order (drives the host's swatch strip).
    pub fn iter(&self) -> impl Iterator<Item = (u8, Color32)> + '_ {
        self.colors.iter().map(|(&idx, &color)| (idx, color))
    }
}

/// Parse a `#rrggbb` string, the form session configs carry colors in.
pub fn parse_hex_color(s: &str) -> Option<Color32> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex_color("#c7cfa2"), Some(Color32::from_rgb(0xc7, 0xcf, 0xa2)));
        assert_eq!(parse_hex_color("#1c1c1c"), Some(Color32::from_rgb(0x1c, 0x1c, 0x1c)));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert_eq!(parse_hex_color("c7cfa2"), None);
        assert_eq!(parse_hex_color("#c7cfa"), None);
        assert_eq!(parse_hex_color("#c7cfa2ff"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn missing_index_gets_fallback_color() {
        let mut colors = BTreeMap::new();
        colors.insert(0u8, "#8a966d".to_string());
        let palette = ColorPalette::from_hex(&colors);
        assert_eq!(palette.color_of(0), Color32::from_rgb(0x8a, 0x96, 0x6d));
        assert_eq!(palette.color_of(200), MISSING_COLOR);
        assert!(!palette.contains(200));
    }

    #[test]
    fn bad_entries_are_skipped() {
        let mut colors = BTreeMap::new();
        colors.insert(0u8, "#4d513c".to_string());
        colors.insert(1u8, "not a color".to_string());
        let palette = ColorPalette::from_hex(&colors);
        assert_eq!(palette.len(), 1);
    }
}
