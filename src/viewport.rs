//! Zoom/pan transform between pointer space and the tile grid.

use egui::{Pos2, Rect, Vec2, pos2};

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 100.0;

/// Wheel-delta to zoom-level proportionality.
const ZOOM_PER_SCROLL_UNIT: f32 = 1.0 / 1000.0;

/// View state for one editing session.
///
/// `zoom_level == 1` with zero offsets means the tile exactly fills the
/// canvas. The zoom offset is a single scalar applied on both axes,
/// recomputed from the zoom level alone so the zoom stays anchored at the
/// canvas center (a deliberate simplification — not pointer-anchored).
#[derive(Clone, Debug)]
pub struct Viewport {
    resolution: u32,
    canvas_rect: Rect,
    zoom_level: f32,
    zoom_offset: f32,
    pan_offset: Vec2,
}

impl Viewport {
    pub fn new(resolution: u32) -> Self {
        Self {
            resolution: resolution.max(1),
            canvas_rect: Rect::ZERO,
            zoom_level: 1.0,
            zoom_offset: 0.0,
            pan_offset: Vec2::ZERO,
        }
    }

    /// Device-pixel size of one grid cell under the current zoom.
    pub fn ppd(&self) -> f32 {
        self.canvas_rect.width() / self.resolution as f32 * self.zoom_level
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    pub fn zoom_level(&self) -> f32 {
        self.zoom_level
    }

    pub fn zoom_offset(&self) -> f32 {
        self.zoom_offset
    }

    pub fn pan_offset(&self) -> Vec2 {
        self.pan_offset
    }

    /// Adopt the drawing surface's current rect. A size change recomputes
    /// the zoom offset; zoom level and pan survive resizes untouched.
    /// Returns whether the dimensions actually changed.
    pub fn set_canvas_rect(&mut self, rect: Rect) -> bool {
        let resized = rect.size() != self.canvas_rect.size();
        self.canvas_rect = rect;
        if resized {
            self.recompute_zoom_offset();
        }
        resized
    }

    /// Wheel zoom: scroll up zooms in, proportional to the delta.
    pub fn scroll(&mut self, delta_y: f32) {
        self.set_zoom(self.zoom_level + delta_y * ZOOM_PER_SCROLL_UNIT);
    }

    /// Set the zoom level directly, clamped so the transform never
    /// degenerates, and re-center the tile.
    pub fn set_zoom(&mut self, level: f32) {
        self.zoom_level = if level.is_finite() {
            level.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            1.0
        };
        self.recompute_zoom_offset();
    }

    /// Accumulate a pointer-movement delta. Unclamped: panning arbitrarily
    /// far off-tile is allowed.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan_offset += delta;
    }

    // `-w·(zoom-1)/2` keeps the tile centered while it grows or shrinks.
    fn recompute_zoom_offset(&mut self) {
        self.zoom_offset = -self.canvas_rect.width() * (self.zoom_level - 1.0) / 2.0;
    }

    /// Screen rect of grid cell `(x, y)`. Coordinates outside
    /// `[0, resolution)` address neighbor-tile cells. Adjacent cells may
    /// overlap by up to one device pixel from the floor/ceil rounding, which
    /// hides sub-pixel seams between redraws.
    pub fn cell_rect(&self, x: i32, y: i32) -> Rect {
        let ppd = self.ppd();
        let dx = (x as f32 * ppd).floor() + self.zoom_offset + self.pan_offset.x;
        let dy = (y as f32 * ppd).floor() + self.zoom_offset + self.pan_offset.y;
        Rect::from_min_size(
            pos2(self.canvas_rect.left() + dx.ceil(), self.canvas_rect.top() + dy.ceil()),
            Vec2::splat(ppd.ceil()),
        )
    }

    /// Grid cell under a pointer position. `None` only while the transform
    /// is degenerate (surface not yet sized). Bounds checking against the
    /// tile is the caller's responsibility.
    pub fn grid_at(&self, pointer: Pos2) -> Option<(i32, i32)> {
        let ppd = self.ppd();
        if !ppd.is_finite() || ppd <= 0.0 {
            return None;
        }
        let x = (pointer.x - self.canvas_rect.left() - self.zoom_offset - self.pan_offset.x) / ppd;
        let y = (pointer.y - self.canvas_rect.top() - self.zoom_offset - self.pan_offset.y) / ppd;
        Some((x.floor() as i32, y.floor() as i32))
    }

    /// Tile origin in screen space (top-left of cell `(0,0)` before the
    /// per-cell rounding) — the anchor for grid lines and the outline.
    pub fn tile_origin(&self) -> Pos2 {
        pos2(
            self.canvas_rect.left() + self.zoom_offset + self.pan_offset.x,
            self.canvas_rect.top() + self.zoom_offset + self.pan_offset.y,
        )
    }

    /// Side length of the transformed tile in device pixels.
    pub fn tile_extent(&self) -> f32 {
        self.resolution as f32 * self.ppd()
    }
}
