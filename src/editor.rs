//! Pointer/wheel interpretation and tile mutation.

use eframe::egui;
use egui::{PointerButton, Pos2, Rect, Sense, Vec2};

use crate::buffer::PixelBuffer;
use crate::compositor::TileCompositor;
use crate::config::{self, EditorConfig};
use crate::palette::ColorPalette;
use crate::stroke::StrokePath;
use crate::viewport::Viewport;

/// Which gesture currently owns the pointer. Drawing (primary button) and
/// panning (secondary button) are mutually exclusive: pressing the other
/// button while a gesture is active is ignored, as is releasing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
enum Gesture {
    #[default]
    Idle,
    Drawing,
    Panning,
}

/// The interaction controller: owns the tile being edited and its view
/// state, interprets pointer/wheel/resize events, and assembles the redraw.
///
/// All session state lives here as plain owned fields — the same fields the
/// event handlers write are the ones painting reads. Dropping the value
/// releases everything; no listeners, timers, or threads outlive it.
pub struct EditorCanvas {
    buffer: PixelBuffer,
    palette: ColorPalette,
    /// Neighbor snapshots keyed by relative tile offset, in draw order.
    neighbors: Vec<((i32, i32), PixelBuffer)>,
    viewport: Viewport,
    compositor: TileCompositor,
    color_index: u8,
    gesture: Gesture,
    /// Snapshot staged on Drawing→Idle, taken by the host.
    pending_pixels_changed: Option<Vec<u8>>,
}

impl EditorCanvas {
    pub fn new(cfg: &EditorConfig) -> Self {
        let palette = ColorPalette::from_hex(&cfg.colors);

        // The buffer sanity-clamps the configured resolution; everything
        // else in the session follows its value so the transform and the
        // neighbor checks agree with the storage.
        let buffer = PixelBuffer::new_filled(cfg.resolution, cfg.default_index);
        let resolution = buffer.resolution();

        let mut neighbors = Vec::new();
        for (key, indices) in &cfg.neighbor_tiles {
            let Some(offset) = config::parse_tile_key(key) else {
                crate::log_warn!("editor: ignoring neighbor tile with malformed key {:?}", key);
                continue;
            };
            match PixelBuffer::from_indices(resolution, indices.clone()) {
                Some(tile) => neighbors.push((offset, tile)),
                None => crate::log_warn!(
                    "editor: ignoring neighbor tile {:?} ({} indices, expected {})",
                    key,
                    indices.len(),
                    resolution as usize * resolution as usize
                ),
            }
        }
        // Deterministic draw order regardless of map iteration.
        neighbors.sort_by_key(|(offset, _)| *offset);

        Self {
            buffer,
            palette,
            neighbors,
            viewport: Viewport::new(resolution),
            compositor: TileCompositor::new(cfg.draw_grid, cfg.default_index),
            color_index: cfg.color_index,
            gesture: Gesture::Idle,
            pending_pixels_changed: None,
        }
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn color_index(&self) -> u8 {
        self.color_index
    }

    /// Select the palette index subsequent writes use (driven by the host's
    /// palette UI).
    pub fn set_color_index(&mut self, index: u8) {
        self.color_index = index;
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture == Gesture::Drawing
    }

    pub fn is_panning(&self) -> bool {
        self.gesture == Gesture::Panning
    }

    /// Snapshot staged by the last completed draw gesture, if any. The host
    /// polls this once per frame and forwards it outward; each gesture
    /// stages exactly one snapshot.
    pub fn take_pixels_changed(&mut self) -> Option<Vec<u8>> {
        self.pending_pixels_changed.take()
    }

    // ---- event interpretation (host-independent) --------------------------

    /// Resize/relayout: adopt the drawing surface's current rect.
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.viewport.set_canvas_rect(rect);
    }

    pub fn pointer_down(&mut self, button: PointerButton, pos: Pos2) {
        match (button, self.gesture) {
            (PointerButton::Primary, Gesture::Idle) => {
                self.paint_at(pos);
                self.gesture = Gesture::Drawing;
            }
            (PointerButton::Secondary, Gesture::Idle) => {
                self.gesture = Gesture::Panning;
            }
            _ => {}
        }
    }

    /// Pointer motion: `delta` is the movement since the previous event,
    /// `pos` the current position.
    pub fn pointer_moved(&mut self, pos: Pos2, delta: Vec2) {
        match self.gesture {
            Gesture::Drawing => {
                for sample in StrokePath::new(pos, delta) {
                    self.paint_at(sample);
                }
                // The interpolated batch stops short of the endpoint; the
                // direct sample keeps a fast drag's final cell painted.
                self.paint_at(pos);
            }
            Gesture::Panning => self.viewport.pan_by(delta),
            Gesture::Idle => {}
        }
    }

    /// Releases are honored regardless of pointer position, so drags that
    /// end off the canvas still terminate their gesture.
    pub fn pointer_up(&mut self, button: PointerButton) {
        match (button, self.gesture) {
            (PointerButton::Primary, Gesture::Drawing) => {
                self.gesture = Gesture::Idle;
                self.pending_pixels_changed = Some(self.buffer.snapshot());
            }
            (PointerButton::Secondary, Gesture::Panning) => {
                self.gesture = Gesture::Idle;
            }
            _ => {}
        }
    }

    /// Wheel zoom; valid in any gesture state.
    pub fn scroll(&mut self, delta_y: f32) {
        self.viewport.scroll(delta_y);
    }

    /// Write the selected color under a pointer position. Out-of-tile hits
    /// and degenerate transforms are dropped silently — this is the
    /// authoritative bounds test; the buffer itself never guards.
    fn paint_at(&mut self, pos: Pos2) {
        let Some((x, y)) = self.viewport.grid_at(pos) else {
            return;
        };
        let res = self.buffer.resolution() as i32;
        if x < 0 || y < 0 || x >= res || y >= res {
            return;
        }
        self.buffer.set(x as u32, y as u32, self.color_index);
    }

    // ---- egui host wiring --------------------------------------------------

    /// Lay out the canvas, translate this frame's input into engine events,
    /// and paint the composite. Pan deltas accumulated since the previous
    /// frame are all reflected by this frame's single composite.
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let available = ui.available_size();
        let (response, painter) = ui.allocate_painter(available, Sense::click_and_drag());
        self.set_canvas_rect(response.rect);

        let input = ui.input(|i| FrameInput {
            primary_pressed: i.pointer.button_pressed(PointerButton::Primary),
            secondary_pressed: i.pointer.button_pressed(PointerButton::Secondary),
            primary_released: i.pointer.primary_released(),
            secondary_released: i.pointer.secondary_released(),
            pointer: i.pointer.interact_pos(),
            delta: i.pointer.delta(),
            scroll_y: i.scroll_delta.y,
        });

        // Wheel zoom only while the pointer is over the canvas, so panel
        // scrolling elsewhere doesn't zoom the tile.
        if response.hovered() && input.scroll_y != 0.0 {
            self.scroll(input.scroll_y);
        }

        if let Some(pos) = input.pointer {
            if response.rect.contains(pos) {
                if input.primary_pressed {
                    self.pointer_down(PointerButton::Primary, pos);
                }
                if input.secondary_pressed {
                    self.pointer_down(PointerButton::Secondary, pos);
                }
            }
            if input.delta != Vec2::ZERO {
                self.pointer_moved(pos, input.delta);
            }
        }
        if input.primary_released {
            self.pointer_up(PointerButton::Primary);
        }
        if input.secondary_released {
            self.pointer_up(PointerButton::Secondary);
        }

        if self.gesture != Gesture::Idle {
            ui.ctx().request_repaint();
        }

        painter.extend(self.compositor.composite(
            &self.viewport,
            &self.buffer,
            &self.neighbors,
            &self.palette,
        ));
    }
}

/// One frame's worth of pointer/wheel input, read out of egui in one pass.
struct FrameInput {
    primary_pressed: bool,
    secondary_pressed: bool,
    primary_released: bool,
    secondary_released: bool,
    pointer: Option<Pos2>,
    delta: Vec2,
    scroll_y: f32,
}
