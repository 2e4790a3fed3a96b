//! Full-frame redraw assembly.

use egui::{Color32, Rect, Shape, Stroke, Vec2, pos2};

use crate::buffer::PixelBuffer;
use crate::palette::ColorPalette;
use crate::viewport::Viewport;

/// Tile outline accent.
const OUTLINE_COLOR: Color32 = Color32::from_rgb(0x91, 0x38, 0x91);
/// Internal grid-line gray.
const GRID_COLOR: Color32 = Color32::from_rgb(0x59, 0x59, 0x59);
const OVERLAY_STROKE_WIDTH: f32 = 2.0;

/// Assembles one complete redraw as an ordered shape list.
///
/// The order is a contract, not cosmetics — later shapes paint over earlier
/// ones: background fill, neighbor tiles, the active tile, grid lines,
/// outline. The compositor only reads state; it never mutates any of it.
pub struct TileCompositor {
    pub draw_grid: bool,
    /// Palette index used for the whole-surface background fill.
    pub background_index: u8,
}

impl TileCompositor {
    pub fn new(draw_grid: bool, background_index: u8) -> Self {
        Self { draw_grid, background_index }
    }

    pub fn composite(
        &self,
        viewport: &Viewport,
        buffer: &PixelBuffer,
        neighbors: &[((i32, i32), PixelBuffer)],
        palette: &ColorPalette,
    ) -> Vec<Shape> {
        let canvas = viewport.canvas_rect();
        let mut shapes = Vec::with_capacity(buffer.len() + 4 * buffer.resolution() as usize);

        // 1. Background fill over the whole physical surface.
        shapes.push(Shape::rect_filled(canvas, 0.0, palette.color_of(self.background_index)));

        // 2. Neighbor tiles, shifted by their relative offset in grid cells.
        //    Tiles fully outside the view would be clipped anyway; skipping
        //    them keeps the shape list proportional to what is visible.
        let res = buffer.resolution() as i32;
        for ((dx, dy), tile) in neighbors {
            let origin = viewport.cell_rect(dx * res, dy * res).min;
            let extent = Rect::from_min_size(origin, Vec2::splat(viewport.tile_extent().ceil() + 1.0));
            if !extent.intersects(canvas) {
                continue;
            }
            for (x, y, color) in tile.cells() {
                shapes.push(Shape::rect_filled(
                    viewport.cell_rect(x as i32 + dx * res, y as i32 + dy * res),
                    0.0,
                    palette.color_of(color),
                ));
            }
        }

        // 3. The active tile, un-shifted.
        for (x, y, color) in buffer.cells() {
            shapes.push(Shape::rect_filled(
                viewport.cell_rect(x as i32, y as i32),
                0.0,
                palette.color_of(color),
            ));
        }

        // 4. Internal grid boundaries (resolution − 1 per axis).
        if self.draw_grid {
            push_grid_lines(viewport, buffer.resolution(), &mut shapes);
        }

        // 5. Single outline rectangle at the transformed tile bounds.
        let origin = viewport.tile_origin();
        shapes.push(Shape::rect_stroke(
            Rect::from_min_size(
                pos2(origin.x.ceil(), origin.y.ceil()),
                Vec2::splat(viewport.tile_extent().ceil()),
            ),
            0.0,
            Stroke::new(OVERLAY_STROKE_WIDTH, OUTLINE_COLOR),
        ));

        shapes
    }
}

fn push_grid_lines(viewport: &Viewport, resolution: u32, shapes: &mut Vec<Shape>) {
    let stroke = Stroke::new(OVERLAY_STROKE_WIDTH, GRID_COLOR);
    let origin = viewport.tile_origin();
    let ppd = viewport.ppd();
    let extent = viewport.tile_extent();

    // Vertical
    for pos in 1..resolution {
        let x = (origin.x + pos as f32 * ppd).ceil();
        let top = pos2(x, origin.y.ceil());
        shapes.push(Shape::line_segment([top, pos2(x, (top.y + extent).ceil())], stroke));
    }
    // Horizontal
    for pos in 1..resolution {
        let y = (origin.y + pos as f32 * ppd).ceil();
        let left = pos2(origin.x.ceil(), y);
        shapes.push(Shape::line_segment([left, pos2((left.x + extent).ceil(), y)], stroke));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::vec2;
    use std::collections::BTreeMap;

    fn palette() -> ColorPalette {
        let mut colors = BTreeMap::new();
        colors.insert(0u8, "#c7cfa2".to_string());
        colors.insert(1u8, "#8a966d".to_string());
        colors.insert(2u8, "#4d513c".to_string());
        colors.insert(3u8, "#1c1c1c".to_string());
        ColorPalette::from_hex(&colors)
    }

    fn viewport(res: u32, side: f32) -> Viewport {
        let mut vp = Viewport::new(res);
        vp.set_canvas_rect(Rect::from_min_size(pos2(0.0, 0.0), vec2(side, side)));
        vp
    }

    fn fill_rect(shape: &Shape) -> Rect {
        match shape {
            Shape::Rect(r) => r.rect,
            other => panic!("expected a rect shape, got {:?}", other),
        }
    }

    #[test]
    fn draw_order_is_background_cells_outline() {
        let vp = viewport(4, 40.0);
        let buffer = PixelBuffer::new_filled(4, 3);
        let compositor = TileCompositor::new(false, 3);
        let shapes = compositor.composite(&vp, &buffer, &[], &palette());

        // background + 16 cells + outline
        assert_eq!(shapes.len(), 1 + 16 + 1);
        assert_eq!(fill_rect(&shapes[0]), vp.canvas_rect());
        match shapes.last().unwrap() {
            Shape::Rect(r) => {
                assert_eq!(r.stroke.color, OUTLINE_COLOR);
                assert_eq!(r.fill, Color32::TRANSPARENT);
            }
            other => panic!("expected outline rect, got {:?}", other),
        }
    }

    #[test]
    fn grid_adds_one_line_per_internal_boundary() {
        let vp = viewport(4, 40.0);
        let buffer = PixelBuffer::new_filled(4, 3);
        let with_grid = TileCompositor::new(true, 3).composite(&vp, &buffer, &[], &palette());
        let without = TileCompositor::new(false, 3).composite(&vp, &buffer, &[], &palette());
        assert_eq!(with_grid.len() - without.len(), 2 * 3);
        let lines = with_grid
            .iter()
            .filter(|s| matches!(s, Shape::LineSegment { .. }))
            .count();
        assert_eq!(lines, 6);
    }

    #[test]
    fn neighbor_cells_start_one_resolution_to_the_right() {
        let res = 4u32;
        let neighbor = PixelBuffer::new_filled(res, 2);
        let compositor = TileCompositor::new(false, 3);

        for zoom in [0.5, 1.0, 2.0, 5.0] {
            let mut vp = viewport(res, 40.0);
            vp.set_zoom(zoom);
            // pull the right-hand neighbor into view at every zoom level
            vp.pan_by(vec2(-vp.tile_extent() / 2.0, 0.0));
            let buffer = PixelBuffer::new_filled(res, 3);
            let shapes =
                compositor.composite(&vp, &buffer, &[((1, 0), neighbor.clone())], &palette());

            // shapes[1] is the neighbor's cell (0,0): exactly `res` grid
            // units right of the active tile's origin
            assert_eq!(fill_rect(&shapes[1]), vp.cell_rect(res as i32, 0));
            // and its last cell sits at grid (2·res − 1, res − 1)
            let last_neighbor = fill_rect(&shapes[res as usize * res as usize]);
            assert_eq!(last_neighbor, vp.cell_rect(2 * res as i32 - 1, res as i32 - 1));
        }
    }

    #[test]
    fn far_offscreen_neighbors_are_culled() {
        let vp = viewport(4, 40.0);
        let buffer = PixelBuffer::new_filled(4, 3);
        let neighbor = PixelBuffer::new_filled(4, 2);
        let compositor = TileCompositor::new(false, 3);

        let near = compositor.composite(&vp, &buffer, &[((1, 0), neighbor.clone())], &palette());
        let far = compositor.composite(&vp, &buffer, &[((50, 50), neighbor)], &palette());
        let none = compositor.composite(&vp, &buffer, &[], &palette());

        assert_eq!(near.len(), none.len() + 16);
        assert_eq!(far.len(), none.len());
    }

    #[test]
    fn neighbor_order_is_below_the_active_tile() {
        // A neighbor at (0,0) overlaps the active tile; the active tile's
        // cells must come later in the list so they paint on top.
        let vp = viewport(2, 20.0);
        let buffer = PixelBuffer::new_filled(2, 3);
        let overlapping = PixelBuffer::new_filled(2, 1);
        let shapes = TileCompositor::new(false, 3)
            .composite(&vp, &buffer, &[((0, 0), overlapping)], &palette());

        let cell = vp.cell_rect(0, 0);
        let indices: Vec<usize> = shapes
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, s)| fill_rect(s) == cell)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(indices.len(), 2);
        assert!(indices[0] < indices[1]);
    }
}
