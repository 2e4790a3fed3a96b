//! Session construction parameters.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Everything the engine needs to start an editing session.
///
/// Colors are `#rrggbb` strings and neighbor tiles are keyed by relative
/// tile offset `"dx,dy"` (the active tile sits at the origin), matching the
/// form the surrounding application supplies them in.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid side length in cells; fixed for the session.
    pub resolution: u32,
    /// Currently selected palette index for drawing.
    pub color_index: u8,
    /// Index every cell starts as; also the background fill.
    pub default_index: u8,
    /// Palette: color index → display color.
    pub colors: BTreeMap<u8, String>,
    /// Neighbor tile snapshots, each `resolution²` indices long.
    pub neighbor_tiles: BTreeMap<String, Vec<u8>>,
    /// Overlay the internal grid lines.
    pub draw_grid: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let mut colors = BTreeMap::new();
        colors.insert(0, "#c7cfa2".to_string());
        colors.insert(1, "#8a966d".to_string());
        colors.insert(2, "#4d513c".to_string());
        colors.insert(3, "#1c1c1c".to_string());
        Self {
            resolution: 32,
            color_index: 0,
            default_index: 3,
            colors,
            neighbor_tiles: BTreeMap::new(),
            draw_grid: true,
        }
    }
}

impl EditorConfig {
    /// Load a JSON session file. `None` on any I/O or parse failure (logged;
    /// callers fall back to defaults).
    pub fn load_json(path: &Path) -> Option<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                crate::log_warn!("config: cannot read {:?}: {}", path, e);
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                crate::log_warn!("config: cannot parse {:?}: {}", path, e);
                None
            }
        }
    }
}

/// Parse a `"dx,dy"` tile key into a signed offset pair.
pub fn parse_tile_key(key: &str) -> Option<(i32, i32)> {
    let (dx, dy) = key.split_once(',')?;
    Some((dx.trim().parse().ok()?, dy.trim().parse().ok()?))
}
