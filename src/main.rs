use std::path::Path;

use eframe::egui;
use rand::Rng;

use tiledraw::app::TiledrawApp;
use tiledraw::config::EditorConfig;
use tiledraw::{log_info, logger};

fn main() -> Result<(), eframe::Error> {
    // Initialize session log (overwrites previous session log)
    logger::init();

    // Optional session file; otherwise the built-in demo session.
    let mut config = std::env::args()
        .nth(1)
        .and_then(|p| EditorConfig::load_json(Path::new(&p)))
        .unwrap_or_default();

    // Surround the tile with a few random neighbors when the session
    // didn't bring its own, so compositing has something to show.
    if config.neighbor_tiles.is_empty() {
        let mut rng = rand::thread_rng();
        let cells = (config.resolution * config.resolution) as usize;
        for key in ["-1,0", "0,-1", "-1,-1", "1,0"] {
            let tile: Vec<u8> = (0..cells).map(|_| rng.gen_range(0..=3)).collect();
            config.neighbor_tiles.insert(key.to_string(), tile);
        }
    }
    log_info!(
        "session: {}x{} tile, {} neighbors, grid {}",
        config.resolution,
        config.resolution,
        config.neighbor_tiles.len(),
        if config.draw_grid { "on" } else { "off" }
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_title("tiledraw"),
        ..Default::default()
    };

    eframe::run_native(
        "tiledraw",
        options,
        Box::new(move |_cc| Box::new(TiledrawApp::new(&config))),
    )
}
