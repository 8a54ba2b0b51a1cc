//! Identicon renderer.
//!
//! `Identicon` holds a validated configuration and renders inputs into
//! pixel buffers. Each render hashes the input, derives the foreground
//! color, pattern and shape kind from the seed, and draws one shape per
//! active cell over a light gray background.
//!
//! The renderer keeps no scratch state between calls: every `make` starts
//! from a fresh hasher. An `Identicon` is `Copy + Send + Sync` and can be
//! shared freely between threads.

use crate::basics::ufloor;
use crate::color::BACKGROUND;
use crate::error::IdenticonError;
use crate::pattern::{generate_pattern, PatternGrid};
use crate::pixfmt_rgba::PixfmtRgba32;
use crate::renderer_base::RendererBase;
use crate::rendering_buffer::PixelBuffer;
use crate::seed::Seed;
use crate::shapes::ShapeRenderer;

/// Fraction of the output size left blank around the grid.
const MARGIN_RATIO: f64 = 0.1;

/// Largest accepted output size. Pixel coordinates must fit in `i32`.
pub const MAX_SIZE: u32 = i32::MAX as u32;

// ============================================================================
// IdenticonConfig
// ============================================================================

/// Output size and grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdenticonConfig {
    /// Width and height of the square canvas, in pixels.
    pub size: u32,
    pub rows: u32,
    pub cols: u32,
}

impl IdenticonConfig {
    pub fn new(size: u32, rows: u32, cols: u32) -> Self {
        Self { size, rows, cols }
    }

    pub fn validate(&self) -> Result<(), IdenticonError> {
        if self.size == 0 {
            return Err(IdenticonError::ZeroSize);
        }
        if self.size > MAX_SIZE {
            return Err(IdenticonError::SizeTooLarge {
                size: self.size,
                max: MAX_SIZE,
            });
        }
        if self.rows == 0 || self.cols == 0 {
            return Err(IdenticonError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cell_size() == 0 {
            return Err(IdenticonError::GridTooLarge {
                size: self.size,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// `size / max(rows, cols)`: the largest square cell the full canvas fits.
    pub fn cell_size(&self) -> u32 {
        self.size / self.rows.max(self.cols).max(1)
    }

    /// Blank border on each side, 10% of the size rounded down.
    pub fn margin(&self) -> u32 {
        ufloor(self.size as f64 * MARGIN_RATIO)
    }

    /// Side of the area inside the margins.
    pub fn inner_size(&self) -> u32 {
        self.size - 2 * self.margin()
    }

    /// Cell side used when drawing. Columns decide it even when `rows > cols`,
    /// so tall grids may run past the bottom margin and get clipped.
    pub fn grid_cell_size(&self) -> u32 {
        self.inner_size() / self.cols.max(1)
    }
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self::new(300, 5, 5)
    }
}

// ============================================================================
// Identicon
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identicon {
    config: IdenticonConfig,
}

impl Identicon {
    /// Create a renderer for `size × size` images over a `rows × cols` grid.
    pub fn new(size: u32, rows: u32, cols: u32) -> Result<Self, IdenticonError> {
        Self::from_config(IdenticonConfig::new(size, rows, cols))
    }

    pub fn from_config(config: IdenticonConfig) -> Result<Self, IdenticonError> {
        config.validate()?;
        if config.grid_cell_size() == 0 {
            log::warn!(
                "{}x{} grid leaves no room inside the {}px margins; images will be blank",
                config.rows,
                config.cols,
                config.size,
            );
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &IdenticonConfig {
        &self.config
    }

    /// Render the identicon for `input`.
    pub fn make(&self, input: &[u8]) -> PixelBuffer {
        self.make_from_seed(Seed::from_bytes(input))
    }

    /// Render the identicon for an already computed seed.
    pub fn make_from_seed(&self, seed: Seed) -> PixelBuffer {
        let IdenticonConfig { size, rows, cols } = self.config;
        let margin = self.config.margin();
        let cell_size = self.config.grid_cell_size();

        let foreground = seed.foreground();
        let kind = seed.shape_kind();
        let pattern = generate_pattern(seed, rows, cols);

        let mut buf = PixelBuffer::new(size, size, BACKGROUND);
        {
            let mut ren = RendererBase::new(PixfmtRgba32::new(&mut buf));
            let mut shapes = ShapeRenderer::new(&mut ren, foreground);
            for (col, row) in pattern.active_cells() {
                shapes.cell(col, row, cell_size, margin, kind);
            }
        }

        log::debug!(
            "rendered identicon: seed={:#018x} shape={:?} cells={} color={:?}",
            seed.value(),
            kind,
            pattern.count_active(),
            foreground,
        );
        buf
    }

    /// Pattern grid `make` would draw for `input`.
    pub fn pattern(&self, input: &[u8]) -> PatternGrid {
        let seed = Seed::from_bytes(input);
        generate_pattern(seed, self.config.rows, self.config.cols)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeKind;

    fn default_renderer() -> Identicon {
        Identicon::from_config(IdenticonConfig::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(Identicon::new(0, 5, 5), Err(IdenticonError::ZeroSize));
        assert_eq!(
            Identicon::new(64, 0, 5),
            Err(IdenticonError::EmptyGrid { rows: 0, cols: 5 })
        );
        assert_eq!(
            Identicon::new(64, 5, 0),
            Err(IdenticonError::EmptyGrid { rows: 5, cols: 0 })
        );
    }

    #[test]
    fn test_new_rejects_subpixel_cells() {
        assert_eq!(
            Identicon::new(4, 5, 2),
            Err(IdenticonError::GridTooLarge {
                size: 4,
                rows: 5,
                cols: 2
            })
        );
        assert!(Identicon::new(5, 5, 5).is_ok());
    }

    #[test]
    fn test_new_rejects_oversized_canvas() {
        let too_big = MAX_SIZE + 1;
        assert_eq!(
            Identicon::new(too_big, 5, 5),
            Err(IdenticonError::SizeTooLarge {
                size: too_big,
                max: MAX_SIZE
            })
        );
        assert_eq!(
            IdenticonConfig::new(u32::MAX, 1, 1).validate(),
            Err(IdenticonError::SizeTooLarge {
                size: u32::MAX,
                max: MAX_SIZE
            })
        );
        assert!(IdenticonConfig::new(MAX_SIZE, 5, 5).validate().is_ok());
    }

    #[test]
    fn test_config_sizing() {
        let config = IdenticonConfig::default();
        assert_eq!(config, IdenticonConfig::new(300, 5, 5));
        assert_eq!(config.cell_size(), 60);
        assert_eq!(config.margin(), 30);
        assert_eq!(config.inner_size(), 240);
        assert_eq!(config.grid_cell_size(), 48);
    }

    #[test]
    fn test_config_sizing_uneven_grid() {
        let config = IdenticonConfig::new(100, 8, 4);
        assert_eq!(config.cell_size(), 12);
        assert_eq!(config.margin(), 10);
        // Columns decide the drawn cell size
        assert_eq!(config.grid_cell_size(), 20);
    }

    #[test]
    fn test_make_dimensions() {
        let icon = Identicon::new(64, 5, 5).unwrap();
        let img = icon.make(b"hello");
        assert_eq!(img.width(), 64);
        assert_eq!(img.height(), 64);
        assert!(img.pixels().all(|p| p.is_opaque()));
    }

    #[test]
    fn test_make_matches_make_from_seed() {
        let icon = default_renderer();
        assert_eq!(
            icon.make(b"test data"),
            icon.make_from_seed(Seed::from_bytes(b"test data"))
        );
    }

    #[test]
    fn test_zero_seed_is_blank() {
        let icon = default_renderer();
        let img = icon.make_from_seed(Seed::new(0));
        assert!(img.pixels().all(|p| p == BACKGROUND));
    }

    #[test]
    fn test_margin_stays_background() {
        let icon = default_renderer();
        // Fifteen set bits fill a 5x5 grid, and 0x7fff % 7 == 0 selects squares
        let seed = Seed::new(0x7fff);
        assert_eq!(seed.shape_kind(), ShapeKind::Square);
        let img = icon.make_from_seed(seed);
        assert_eq!(img.pixel(29, 150), Some(BACKGROUND));
        assert_eq!(img.pixel(150, 29), Some(BACKGROUND));
        assert_eq!(img.pixel(270, 150), Some(BACKGROUND));
        assert_eq!(img.pixel(30, 30), Some(seed.foreground()));
        assert_eq!(img.pixel(269, 269), Some(seed.foreground()));
    }
}
