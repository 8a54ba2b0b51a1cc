//! Cell shape primitives.
//!
//! Draws the seven identicon shapes directly into a `RendererBase` without
//! anti-aliasing. Every shape fills pixels with a single opaque color; pixels
//! outside the computed extents are left untouched.

use crate::pixfmt_rgba::PixelFormat;
use crate::renderer_base::RendererBase;

// ============================================================================
// ShapeKind
// ============================================================================

/// The shape drawn into every active cell of one identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    Circle,
    Diamond,
    TriangleUp,
    TriangleRight,
    TriangleDown,
    TriangleLeft,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Diamond,
        ShapeKind::TriangleUp,
        ShapeKind::TriangleRight,
        ShapeKind::TriangleDown,
        ShapeKind::TriangleLeft,
    ];

    /// `seed % 7` selects the kind, in declaration order.
    pub fn from_seed(seed: u64) -> Self {
        Self::ALL[(seed % Self::ALL.len() as u64) as usize]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Direction a triangle points. The full-width edge is on the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Up,
    Right,
    Down,
    Left,
}

// ============================================================================
// ShapeRenderer
// ============================================================================

/// Draws filled primitives in one color.
pub struct ShapeRenderer<'a, PF: PixelFormat> {
    ren: &'a mut RendererBase<PF>,
    fill_color: PF::ColorType,
}

impl<'a, PF: PixelFormat> ShapeRenderer<'a, PF> {
    pub fn new(ren: &'a mut RendererBase<PF>, fill_color: PF::ColorType) -> Self {
        Self { ren, fill_color }
    }

    /// Draw `kind` into the cell at (`col`, `row`) of a grid inset by `margin`.
    pub fn cell(&mut self, col: u32, row: u32, cell_size: u32, margin: u32, kind: ShapeKind) {
        let size = cell_size as i32;
        let x = margin as i32 + col as i32 * size;
        let y = margin as i32 + row as i32 * size;

        match kind {
            ShapeKind::Square => self.square(x, y, size),
            ShapeKind::Circle => self.circle(x + size / 2, y + size / 2, size / 2),
            ShapeKind::Diamond => self.diamond(x, y, size),
            ShapeKind::TriangleUp => self.triangle(x, y, size, Orientation::Up),
            ShapeKind::TriangleRight => self.triangle(x, y, size, Orientation::Right),
            ShapeKind::TriangleDown => self.triangle(x, y, size, Orientation::Down),
            ShapeKind::TriangleLeft => self.triangle(x, y, size, Orientation::Left),
        }
    }

    /// Fill the `size × size` square with its top-left corner at (x, y).
    pub fn square(&mut self, x: i32, y: i32, size: i32) {
        if size > 0 {
            self.ren
                .copy_bar(x, y, x + size - 1, y + size - 1, &self.fill_color);
        }
    }

    /// Fill every pixel with `dx² + dy² <= radius²` around (cx, cy).
    pub fn circle(&mut self, cx: i32, cy: i32, radius: i32) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            let rem = r2 - dy * dy;
            let mut half = 0;
            while (half + 1) * (half + 1) <= rem {
                half += 1;
            }
            self.ren
                .copy_hline(cx - half, cy + dy, cx + half, &self.fill_color);
        }
    }

    /// Fill a diamond whose rows narrow by two pixels per step away from the
    /// cell's middle row.
    pub fn diamond(&mut self, x: i32, y: i32, size: i32) {
        let half = size / 2;
        let cx = x + half;
        for dy in 0..size {
            let width = size - (dy - half).abs() * 2;
            if width <= 0 {
                continue;
            }
            let x1 = cx - width / 2;
            self.ren
                .copy_hline(x1, y + dy, x1 + width - 1, &self.fill_color);
        }
    }

    /// Fill a triangle pointing in `orientation`. Each step away from the
    /// base shortens the span by one pixel at each end.
    pub fn triangle(&mut self, x: i32, y: i32, size: i32, orientation: Orientation) {
        for k in 0..size {
            let extent = size - k * 2;
            if extent <= 0 {
                break;
            }
            let lo = k;
            let hi = k + extent - 1;
            match orientation {
                Orientation::Up => {
                    let row = y + size - k - 1;
                    self.ren.copy_hline(x + lo, row, x + hi, &self.fill_color);
                }
                Orientation::Down => {
                    self.ren.copy_hline(x + lo, y + k, x + hi, &self.fill_color);
                }
                Orientation::Right => {
                    self.ren.copy_vline(x + k, y + lo, y + hi, &self.fill_color);
                }
                Orientation::Left => {
                    let col = x + size - k - 1;
                    self.ren.copy_vline(col, y + lo, y + hi, &self.fill_color);
                }
            }
        }
    }
}

/// Draw one shape of `kind` into the grid cell at (`col`, `row`).
pub fn draw_shape<PF: PixelFormat>(
    ren: &mut RendererBase<PF>,
    col: u32,
    row: u32,
    cell_size: u32,
    margin: u32,
    color: PF::ColorType,
    kind: ShapeKind,
) {
    ShapeRenderer::new(ren, color).cell(col, row, cell_size, margin, kind);
}

// ============================================================================
// Tests
// ============================================================================
