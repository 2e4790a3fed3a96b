//! eframe host around the canvas engine: palette swatches, committed-tile
//! preview, and the central drawing surface.

use eframe::egui;
use egui::{Color32, TextureFilter, TextureHandle, TextureOptions};

use crate::config::EditorConfig;
use crate::editor::EditorCanvas;
use crate::preview;

const PREVIEW_SIZE: f32 = 128.0;

pub struct TiledrawApp {
    editor: EditorCanvas,
    resolution: u32,
    preview_tex: Option<TextureHandle>,
}

impl TiledrawApp {
    pub fn new(cfg: &EditorConfig) -> Self {
        let editor = EditorCanvas::new(cfg);
        // The buffer may have sanity-clamped the configured resolution.
        let resolution = editor.buffer().resolution();
        Self {
            editor,
            resolution,
            preview_tex: None,
        }
    }

    fn swatch_strip(&mut self, ui: &mut egui::Ui) {
        let swatches: Vec<(u8, Color32)> = self.editor.palette().iter().collect();
        ui.horizontal_wrapped(|ui| {
            for (idx, color) in swatches {
                let selected = idx == self.editor.color_index();
                let stroke = if selected {
                    egui::Stroke::new(2.0, ui.visuals().strong_text_color())
                } else {
                    egui::Stroke::NONE
                };
                let button = egui::Button::new("    ").fill(color).stroke(stroke);
                if ui.add(button).on_hover_text(format!("Color {}", idx)).clicked() {
                    self.editor.set_color_index(idx);
                }
            }
        });
    }
}

impl eframe::App for TiledrawApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Forward the last finished stroke to the preview pane. This is the
        // engine's only outward data: one snapshot per draw gesture.
        if let Some(snapshot) = self.editor.take_pixels_changed() {
            crate::log_info!("stroke committed ({} cells)", snapshot.len());
            if let Some(img) = preview::thumbnail(self.resolution, &snapshot, self.editor.palette()) {
                let options = TextureOptions {
                    magnification: TextureFilter::Nearest,
                    minification: TextureFilter::Nearest,
                    ..Default::default()
                };
                self.preview_tex = Some(ctx.load_texture("tile_preview", img, options));
            }
        }

        egui::SidePanel::right("tools")
            .resizable(false)
            .show(ctx, |ui| {
                ui.heading("Palette");
                self.swatch_strip(ui);
                ui.separator();
                ui.label("Last committed tile");
                if let Some(tex) = &self.preview_tex {
                    let sized = egui::load::SizedTexture::new(tex.id(), egui::Vec2::splat(PREVIEW_SIZE));
                    ui.add(egui::Image::from_texture(sized));
                } else {
                    ui.weak("(draw something)");
                }
            });

        // Full-remaining-space drawing surface.
        egui::CentralPanel::default().show(ctx, |ui| self.editor.show(ui));
    }
}
