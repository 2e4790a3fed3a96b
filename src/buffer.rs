//! Flat indexed-color pixel storage for one tile.

/// One tile's pixels: `resolution × resolution` palette indices, row-major.
///
/// Index `i` maps to cell `(i % resolution, i / resolution)`. The length is
/// exactly `resolution²` for the whole session; the buffer is never resized
/// after creation. Bounds checking lives in the interaction controller,
/// which owns the authoritative hit test used for both drawing and
/// hit-testing — `get`/`set` expect in-range coordinates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    resolution: u32,
    pixels: Vec<u8>,
}

/// Largest supported tile edge. Resolutions arrive from arbitrary session
/// JSON; anything past this is clamped so the cell count stays well inside
/// `usize` on every target.
pub const MAX_RESOLUTION: u32 = 4096;

impl PixelBuffer {
    /// Create a buffer with every cell set to `fill` (the session's
    /// background index). Resolution is sanity-clamped to
    /// `[1, MAX_RESOLUTION]`.
    pub fn new_filled(resolution: u32, fill: u8) -> Self {
        let clamped = resolution.clamp(1, MAX_RESOLUTION);
        if clamped != resolution {
            crate::log_warn!("buffer: resolution {} out of range, clamped to {}", resolution, clamped);
        }
        Self {
            resolution: clamped,
            pixels: vec![fill; clamped as usize * clamped as usize],
        }
    }

    /// Import an externally supplied snapshot (neighbor tiles). Returns
    /// `None` when the resolution is out of range or the length is not
    /// `resolution²`.
    pub fn from_indices(resolution: u32, pixels: Vec<u8>) -> Option<Self> {
        if resolution == 0 || resolution > MAX_RESOLUTION {
            return None;
        }
        if pixels.len() != resolution as usize * resolution as usize {
            return None;
        }
        Some(Self { resolution, pixels })
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.pixels[(y * self.resolution + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: u8) {
        self.pixels[(y * self.resolution + x) as usize] = color;
    }

    /// Cells in row-major order as `(x, y, color)`.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32, u8)> + '_ {
        let res = self.resolution;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i as u32 % res, i as u32 / res, c))
    }

    /// Full copy of the raw indices — the pixels-changed payload.
    pub fn snapshot(&self) -> Vec<u8> {
        self.pixels.clone()
    }
}
