//! One-texel-per-cell rendering of a committed tile.

use egui::{Color32, ColorImage};

use crate::palette::ColorPalette;

/// Render a pixel snapshot at 1:1 cell-to-texel, for display as a
/// nearest-filtered preview texture. `None` when the snapshot length does
/// not match the resolution.
pub fn thumbnail(resolution: u32, indices: &[u8], palette: &ColorPalette) -> Option<ColorImage> {
    let side = resolution as usize;
    if side == 0 || indices.len() != side * side {
        return None;
    }
    let pixels: Vec<Color32> = indices.iter().map(|&i| palette.color_of(i)).collect();
    Some(ColorImage { size: [side, side], pixels })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn palette() -> ColorPalette {
        let mut colors = BTreeMap::new();
        colors.insert(0u8, "#c7cfa2".to_string());
        colors.insert(1u8, "#1c1c1c".to_string());
        ColorPalette::from_hex(&colors)
    }

    #[test]
    fn maps_each_index_through_the_palette() {
        let img = thumbnail(2, &[0, 1, 1, 0], &palette()).unwrap();
        assert_eq!(img.size, [2, 2]);
        assert_eq!(img.pixels[0], Color32::from_rgb(0xc7, 0xcf, 0xa2));
        assert_eq!(img.pixels[1], Color32::from_rgb(0x1c, 0x1c, 0x1c));
    }

    #[test]
    fn rejects_mismatched_lengths() {
        assert!(thumbnail(2, &[0, 1, 1], &palette()).is_none());
        assert!(thumbnail(0, &[], &palette()).is_none());
    }
}
