//! tiledraw — an interactive tiled pixel-art canvas engine built on egui.
//!
//! One fixed-resolution indexed-color tile is edited with the primary mouse
//! button while neighboring tiles composite around it; the secondary button
//! pans and the wheel zooms (anchored at the canvas center). When a draw
//! gesture finishes, the engine stages a full snapshot of the tile for the
//! host to pick up.
//!
//! Module map, leaf first: [`buffer`] (pixel storage), [`palette`]
//! (index → color), [`viewport`] (zoom/pan transform), [`stroke`] (gap-free
//! interpolation), [`compositor`] (ordered full-frame redraw), [`editor`]
//! (the interaction controller), [`preview`] (committed-tile thumbnails),
//! with [`config`], [`app`], and [`logger`] around them.

pub mod app;
pub mod buffer;
pub mod compositor;
pub mod config;
pub mod editor;
pub mod logger;
pub mod palette;
pub mod preview;
pub mod stroke;
pub mod viewport;

pub use buffer::PixelBuffer;
pub use compositor::TileCompositor;
pub use config::EditorConfig;
pub use editor::EditorCanvas;
pub use palette::ColorPalette;
pub use stroke::StrokePath;
pub use viewport::Viewport;
